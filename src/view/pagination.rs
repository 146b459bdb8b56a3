//! In-memory pagination.
//!
//! Pages are 1-based. The control strip shows first/prev/next/last jumps
//! around a window of at most five page numbers centered on the current
//! page, clamped at both ends of the range.

/// Total pages for a list, never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    std::cmp::max(1, len.div_ceil(per_page))
}

/// Clamp a requested page into `1..=total`.
pub fn clamp_page(requested: Option<usize>, total: usize) -> usize {
    requested.unwrap_or(1).clamp(1, total)
}

/// Slice of the list visible on `page`.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = (page - 1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Window of at most five page numbers centered on the current page.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    (0..total.min(5))
        .map(|i| {
            if total <= 5 {
                i + 1
            } else if current <= 3 {
                i + 1
            } else if current >= total - 2 {
                total - 4 + i
            } else {
                current - 2 + i
            }
        })
        .collect()
}

/// Render the control strip: first/prev jumps, the number window, then
/// next/last jumps. Jumps on the current edge are rendered disabled.
pub fn render_controls(param: &str, anchor: &str, current: usize, total: usize) -> String {
    let mut html = String::from("<nav class=\"pager\">");

    push_jump(&mut html, param, anchor, "&laquo;", 1, current == 1);
    push_jump(
        &mut html,
        param,
        anchor,
        "&lsaquo;",
        current.saturating_sub(1).max(1),
        current == 1,
    );

    for page in page_window(current, total) {
        let class = if page == current { "page current" } else { "page" };
        html.push_str(&format!(
            "<a class=\"{class}\" href=\"/?{param}={page}#{anchor}\">{page}</a>"
        ));
    }

    push_jump(
        &mut html,
        param,
        anchor,
        "&rsaquo;",
        (current + 1).min(total),
        current == total,
    );
    push_jump(&mut html, param, anchor, "&raquo;", total, current == total);

    html.push_str("</nav>");
    html
}

fn push_jump(
    html: &mut String,
    param: &str,
    anchor: &str,
    label: &str,
    target: usize,
    disabled: bool,
) {
    if disabled {
        html.push_str(&format!("<span class=\"page disabled\">{label}</span>"));
    } else {
        html.push_str(&format!(
            "<a class=\"page\" href=\"/?{param}={target}#{anchor}\">{label}</a>"
        ));
    }
}
