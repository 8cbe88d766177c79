/// Whether `candidate` is a strictly newer release than `current`.
///
/// Compares dot-separated numeric components (`1.10.0 > 1.9.3`). A leading
/// `v` and any pre-release or build suffix are ignored; missing components
/// count as zero. Unparseable versions are never newer.
pub fn is_newer_version(candidate: &str, current: &str) -> bool {
    match (numeric_parts(candidate), numeric_parts(current)) {
        (Some(candidate), Some(current)) => {
            let len = candidate.len().max(current.len());

            for i in 0..len {
                let a = candidate.get(i).copied().unwrap_or(0);
                let b = current.get(i).copied().unwrap_or(0);
                if a != b {
                    return a > b;
                }
            }
            false
        }
        _ => false,
    }
}

fn numeric_parts(version: &str) -> Option<Vec<u64>> {
    let version = version.trim();
    let version = version.strip_prefix(['v', 'V']).unwrap_or(version);
    let core = version.split(['-', '+']).next()?;

    core.split('.').map(|part| part.parse().ok()).collect()
}
