//! The project's own `lbdocs.toml`, written by `lbdocs init`.

pub const DEFAULT_CONFIG: &str = r#"# lbdocs configuration

title = "Vercel AI Gateway Load Balancer"
tagline = "Smart load balancing for Vercel AI Gateway with API key management"
favicon = "img/favicon.ico"

# Production URL and the path the site is served under.
# For GitHub Pages this is usually "/<project>/".
url = "https://newnol.github.io"
base_path = "/Vercel-API-Key/"

organization = "newnol"
project = "Vercel-API-Key"
on_broken_links = "throw"

[i18n]
default_locale = "vi"
locales = ["en", "vi"]

[docs]
sidebar_path = "sidebars.toml"
route_base_path = "/"
edit_url = "https://github.com/newnol/Vercel-API-Key/tree/main/docs/"
blog = false

[theme]
custom_css = "src/css/custom.css"
image = "img/docusaurus-social-card.jpg"
respect_prefers_color_scheme = true
prism_light = "github"
prism_dark = "dracula"

[navbar]
title = "Vercel AI LB"
logo = { alt = "Vercel AI Gateway Load Balancer Logo", src = "img/logo.svg" }

[[navbar.items]]
type = "sidebar-link"
sidebar_id = "tutorialSidebar"
label = "Docs"
position = "left"

[[navbar.items]]
type = "locale-switcher"
position = "right"

[[navbar.items]]
type = "external-link"
label = "GitHub"
href = "https://github.com/newnol/Vercel-API-Key"
position = "right"

[footer]
style = "dark"
copyright = "Copyright © Vercel AI Gateway Load Balancer."

[[footer.links]]
title = "Docs"
items = [
  { label = "Quick Start", to = "/quickstart" },
  { label = "API Reference", to = "/api" },
  { label = "Security", to = "/security" },
]

[[footer.links]]
title = "Resources"
items = [
  { label = "GitHub", href = "https://github.com/newnol/Vercel-API-Key" },
  { label = "Issues", href = "https://github.com/newnol/Vercel-API-Key/issues" },
]

[[footer.links]]
title = "More"
items = [
  { label = "Contributing", to = "/contributing" },
  { label = "Project Structure", to = "/project-structure" },
]
"#;
