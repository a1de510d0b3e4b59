//! Feature callouts shown on the homepage.

use lbdocs_config::ResourceRef;

/// One homepage feature callout.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDescriptor {
    /// Heading, may include an emoji
    pub title: &'static str,

    /// Illustration, relative to the static directory
    pub icon: ResourceRef,

    /// Inline Markdown
    pub description: &'static str,
}

/// Homepage features, rendered left to right.
pub const FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor {
        title: "⚖️ Smart Load Balancing",
        icon: ResourceRef::from_static("img/undraw_docusaurus_mountain.svg"),
        description: "Tự động phân phối requests đến các Vercel API keys dựa trên credit balance. \
                      Weighted random selection đảm bảo sử dụng tối ưu tài nguyên.",
    },
    FeatureDescriptor {
        title: "🔐 API Key Management",
        icon: ResourceRef::from_static("img/undraw_docusaurus_tree.svg"),
        description: "Hệ thống xác thực với rate limiting, expiry dates, và usage tracking. \
                      Quản lý keys dễ dàng qua CLI hoặc Admin API.",
    },
    FeatureDescriptor {
        title: "🚀 100% OpenAI Compatible",
        icon: ResourceRef::from_static("img/undraw_docusaurus_react.svg"),
        description: "Hỗ trợ đầy đủ OpenAI API endpoints với streaming. Drop-in replacement \
                      cho OpenAI SDK - chỉ cần đổi base URL!",
    },
];
