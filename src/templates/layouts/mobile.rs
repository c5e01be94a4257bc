use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; background: #f5f5f5; font-family: system-ui, sans-serif; color: #333; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 16px; background: white; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header h1 { font-size: 18px; margin: 0; }
main { padding: 16px; max-width: 640px; margin: 0 auto; }
.card { background: white; border-radius: 8px; padding: 16px; margin-bottom: 12px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.card a { color: inherit; text-decoration: none; }
.row { display: flex; justify-content: space-between; margin: 4px 0; }
.label { color: #666; }
.status { font-weight: bold; }
.notice { border-left: 4px solid #0066cc; background: #eef5ff; padding: 12px; border-radius: 4px; margin-bottom: 12px; }
.notice.error { border-color: #dc3545; background: #fdeeee; }
.error-text { color: #dc3545; font-size: 14px; margin-top: 4px; }
input[type=text], input[type=email], input[type=search], textarea { width: 100%; box-sizing: border-box; padding: 12px; border: 1px solid #ddd; border-radius: 8px; font-size: 16px; }
.invalid { border-color: #dc3545 !important; }
button { padding: 12px; border: none; border-radius: 8px; font-size: 16px; font-weight: bold; color: white; background: #0066cc; }
button.submit { background: #28a745; width: 100%; }
button.remove { background: none; color: #dc3545; padding: 0; }
.default-action { position: absolute; left: -9999px; width: 1px; height: 1px; overflow: hidden; }
button:disabled { background: #6c757d; }
"#;

pub fn mobile_layout(title: &str, back_href: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    @if let Some(href) = back_href {
                        a href=(href) aria-label="Back" { "‹ Back" }
                    }
                    h1 { (title) }
                }
                main { (content) }
            }
        }
    }
}
