use unicode_width::UnicodeWidthStr;

/// Hard-wraps `s` at `width` display columns, keeping existing line breaks
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    s.chars().fold(String::from(""), |acc: String, c: char| {
        if c == '\n' {
            return format!("{acc}\n");
        }
        let last_line = acc.rsplit('\n').next().unwrap_or(&acc);
        if last_line.width() + c.to_string().width() > width {
            format!("{acc}\n{c}")
        } else {
            format!("{acc}{c}")
        }
    })
}

/// Keeps at most `max_height` lines, replacing the overflow with `...`
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.split('\n').collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Number of terminal rows `s` occupies once wrapped at `width`
pub fn wrapped_height(s: &str, width: usize) -> usize {
    if width == 0 || s.is_empty() {
        return 0;
    }
    wrap_text(s, width).split('\n').count()
}
