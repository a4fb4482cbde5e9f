//! Display labels for enumerated codes and names

/// Label for a relationship sub-type code; unknown codes pass through
pub fn sub_type_label(sub_type: &str) -> &str {
    match sub_type {
        "full-time" => "Full-time",
        "part-time" => "Part-time",
        "secondment" => "Secondment",
        "independent-contractor" => "Independent",
        "consultant" => "Consultant",
        "agency-worker" => "Agency",
        "student-intern" => "Student",
        other => other,
    }
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Status code as words: `in-progress` → `in progress`
pub fn status_label(status: &str) -> String {
    status.replace('-', " ")
}

/// Up to two initials from a name; `??` when there is nothing to use
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    if letters.is_empty() {
        "??".to_string()
    } else {
        letters.to_uppercase()
    }
}

/// Font Awesome icon for a deliverable or task status
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "completed" => "check",
        "in-progress" => "spinner",
        _ => "clock",
    }
}

/// CSS modifier class for a status; free-form codes collapse to `other`
pub fn status_class(status: &str) -> &'static str {
    match status {
        "active" => "active",
        "completed" => "completed",
        "in-progress" => "in-progress",
        "pending" => "pending",
        "not-started" => "not-started",
        "terminated" => "terminated",
        _ => "other",
    }
}
