use std::fmt::Write;

pub const INDEX_FILE_NAME: &str = "index.md";

/// Front matter of a freshly started post. The slug must be validated first,
/// it is written verbatim as the title.
pub fn render_front_matter(slug: &str) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "+++");
    let _ = writeln!(&mut buf, "title = \"{}\"", slug);
    let _ = writeln!(&mut buf, "draft = true");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "[taxonomies]");
    let _ = writeln!(&mut buf, "tags = []");
    let _ = writeln!(&mut buf, "+++");
    buf
}
