//! HTML presentation for the research pages.
//!
//! Plain string rendering; the pages are small enough that a template
//! engine would be overhead. Everything interpolated from user input or
//! upstream responses goes through [`escape_html`].

use tubescout_models::RankedVideo;

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ background-color: #ADD8E6; color: black; font-family: sans-serif; max-width: 720px; margin: 0 auto; padding: 24px; }}
  h1 {{ color: #1E3A5F; }}
  form input[type=text] {{ background-color: #262730; color: white; border: none; border-radius: 6px; padding: 10px; width: 60%; }}
  form button {{ background-color: #FFA500; color: black; font-weight: bold; border: none; border-radius: 6px; padding: 10px 18px; }}
  .card {{ padding: 15px; background-color: #1E3A5F; border-radius: 10px; margin-bottom: 10px; }}
  .card h3 {{ color: #FFA500; margin: 0 0 6px 0; }}
  .card p {{ color: white; margin: 0; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// Landing page with the topic search form.
pub fn index_page() -> String {
    page(
        "TubeScout",
        r#"<h1>&#128202; YouTube Video Researcher</h1>
<p>Gain deep insights into your search topic on YouTube.</p>
<form action="/research" method="get">
  <input type="text" name="topic" placeholder="Enter a topic to research" required>
  <button type="submit">Research</button>
</form>"#,
    )
}

/// Results page: one card per ranked video.
pub fn results_page(topic: &str, videos: &[RankedVideo]) -> String {
    let topic = escape_html(topic);

    let mut body = format!(
        "<h1>&#128202; YouTube Video Researcher</h1>\n<p>Top videos for: <code>{topic}</code></p>\n"
    );

    if videos.is_empty() {
        body.push_str("<p>No videos found for this topic.</p>\n");
    }

    for video in videos {
        body.push_str(&format!(
            r#"<div class="card">
  <h3>{rank}. {title}</h3>
  <p>Views: <b>{views}</b></p>
</div>
"#,
            rank = video.rank,
            title = escape_html(&video.title),
            views = escape_html(&video.views),
        ));
    }

    page(&format!("TubeScout: {topic}"), &body)
}
