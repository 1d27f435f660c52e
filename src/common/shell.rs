use super::Config;

/// Element the wasm app mounts into.
pub const MOUNT_ID: &str = "main";

const BUNDLE_NAME: &str = "welcome-cover";

/// The html document every route is served with.
///
/// The body starts with scrolling disabled, the welcome cover takes over from there.
pub fn render_shell(config: &Config) -> String {
    let lang = escape(&config.site.lang);
    let title = escape(&config.site.title);
    let dark_mode_script = config.appearance.pre_hydration_script();

    let font_awesome = match &config.site.font_awesome {
        Some(href) => {
            let href = escape(href);
            format!(
                r#"
    <link rel="preload" href="{href}" as="style" crossorigin="anonymous">
    <link rel="stylesheet" href="{href}" crossorigin="anonymous" referrerpolicy="no-referrer">"#
            )
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>{font_awesome}
    <script>{dark_mode_script}</script>
  </head>
  <body style="overflow:hidden;height:100vh">
    <div id="{MOUNT_ID}"></div>
    <script type="module">
      import init from "/assets/dioxus/{BUNDLE_NAME}.js";
      init("/assets/dioxus/{BUNDLE_NAME}_bg.wasm");
    </script>
  </body>
</html>
"#
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_contents() {
        let mut config = Config::default();
        config.site.title = "Tom & Jerry".into();
        config.site.lang = "en".into();

        let html = render_shell(&config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains("document.documentElement.classList.add"));
        assert!(html.contains(r#"<body style="overflow:hidden;height:100vh">"#));
        assert!(html.contains(r#"<div id="main"></div>"#));
        assert!(!html.contains("stylesheet"));
    }

    #[test]
    fn test_font_awesome_links() {
        let mut config = Config::default();
        config.site.font_awesome = Some("https://cdn.example.com/fa.css".into());

        let html = render_shell(&config);
        assert!(html.contains(
            r#"<link rel="preload" href="https://cdn.example.com/fa.css" as="style" crossorigin="anonymous">"#
        ));
        assert!(html.contains(r#"referrerpolicy="no-referrer""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
    }
}
