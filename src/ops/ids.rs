use std::collections::HashSet;

/// Next free id of the form `<prefix>-NNN`: one past the largest numeric
/// suffix already used under `prefix`, never colliding with an existing id.
pub fn next_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let prefix_dash = format!("{}-", prefix);
    let mut taken = HashSet::new();
    let mut max = 0usize;
    for id in existing {
        if let Some(n) = id
            .strip_prefix(&prefix_dash)
            .and_then(|rest| rest.parse::<usize>().ok())
        {
            max = max.max(n);
        }
        taken.insert(id);
    }

    let mut n = max.saturating_add(1);
    loop {
        let candidate = format!("{}-{:03}", prefix, n);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n = n.saturating_add(1);
    }
}
