use std::{collections::HashMap, hash::Hash};

/// Invert a map by swapping keys and values
pub fn invert_map<K, V, MK, MV>(original: MK) -> MV
where
    K: Hash + Eq,
    V: Hash + Eq,
    MK: IntoIterator<Item = (K, V)>,
    MV: FromIterator<(V, K)>,
{
    original
        .into_iter()
        .map(|(key, value)| (value, key))
        .collect()
}

/// Build a lookup from class name to class index. When a name repeats, the last index wins.
pub fn index_by_name(names: &[String]) -> HashMap<String, usize> {
    invert_map(names.iter().cloned().enumerate())
}

/// Normalize raw label lines into class names, dropping blank lines
pub fn clean_labels<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
