use super::{RenderError, RenderOptions};
use crate::format::{get_color, split_emphasis};
use crate::model::{Annotation, HighlightedBook};
use quick_xml::escape::escape;
use std::fmt::Write;

const BOOTSTRAP_LINK: &str = r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css">"#;

const HIGHLIGHT_STYLE: &str = r#"<style>
body { margin: 2em auto; max-width: 50em; }
blockquote { border-left: 4px solid #999; padding: 0.5em 1em; }
.b_gray { border-color: #999999; background: #f2f2f2; }
.b_green { border-color: #7ec87e; background: #e8f6e1; }
.b_blue { border-color: #7fb0ea; background: #e3eefb; }
.b_yellow { border-color: #f5d84b; background: #fdf6d3; }
.b_pink { border-color: #f08fb4; background: #fce4ee; }
.b_violet { border-color: #b99ae6; background: #efe7fb; }
.chapter { color: #777; font-variant: small-caps; }
</style>"#;

const TOC_SCRIPT: &str = r##"<script>
document.addEventListener("DOMContentLoaded", function () {
  var toc = document.getElementById("toc");
  var list = document.createElement("ul");
  document.querySelectorAll("section.book h2").forEach(function (heading) {
    var item = document.createElement("li");
    var link = document.createElement("a");
    link.href = "#" + heading.id;
    link.textContent = heading.textContent;
    item.appendChild(link);
    list.appendChild(item);
  });
  toc.appendChild(list);
});
</script>"##;

pub fn render_html(books: &[HighlightedBook], options: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>iBooks Highlights</title>")?;
    if !options.disable_style_framework {
        writeln!(out, "{BOOTSTRAP_LINK}")?;
    }
    writeln!(out, "{HIGHLIGHT_STYLE}")?;
    if !options.disable_toc {
        writeln!(out, "{TOC_SCRIPT}")?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"container\">")?;
    writeln!(out, "<h1>iBooks Highlights</h1>")?;
    writeln!(out, "<p class=\"date\">Exported {}</p>", escape(&options.date))?;
    if !options.disable_toc {
        writeln!(out, "<div id=\"toc\"></div>")?;
    }

    for (index, book) in books.iter().enumerate() {
        write_book(&mut out, index, book)?;
    }

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_book(out: &mut String, index: usize, book: &HighlightedBook) -> Result<(), RenderError> {
    writeln!(out, "<section class=\"book\">")?;
    writeln!(out, "<h2 id=\"book-{index}\">{}</h2>", escape(&book.heading()))?;
    writeln!(
        out,
        "<p class=\"count\">{} highlight{}</p>",
        book.count,
        if book.count == 1 { "" } else { "s" }
    )?;

    let mut chapter: Option<&str> = None;
    for annotation in &book.annotations {
        if let Some(label) = annotation.chapter_label.as_deref()
            && chapter != Some(label)
        {
            writeln!(out, "<h3 class=\"chapter\">{}</h3>", escape(label))?;
            chapter = Some(label);
        }
        write_highlight(out, annotation)?;
    }

    writeln!(out, "</section>")?;
    Ok(())
}

fn write_highlight(out: &mut String, annotation: &Annotation) -> Result<(), RenderError> {
    let representative = annotation.representative_text.as_deref().unwrap_or_default();
    let selected = annotation.selected_text.as_deref().unwrap_or_default();
    let class = get_color(annotation.style).css_class();

    write!(out, "<blockquote class=\"{class}\">")?;
    match split_emphasis(selected, representative) {
        Some((before, span, after)) => write!(
            out,
            "{}<b>{}</b>{}",
            escape(before),
            escape(span),
            escape(after)
        )?,
        None => write!(out, "{}", escape(representative))?,
    }
    writeln!(out, "</blockquote>")?;
    Ok(())
}
