use finquiz::workflows::quiz::ProfileChoice;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Accepts a profile key (`25-34`, `prefer-not`) or its 1-based position in the list.
pub(crate) fn parse_choice<T: ProfileChoice>(raw: &str) -> Result<T, String> {
    if let Some(choice) = T::parse(raw) {
        return Ok(choice);
    }

    let options = T::ordered();
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| options.get(index).copied())
        .ok_or_else(|| {
            let keys: Vec<&str> = options.iter().map(|choice| choice.key()).collect();
            format!("'{}' is not one of: {}", raw.trim(), keys.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use finquiz::workflows::quiz::{AgeBand, Gender};

    #[test]
    fn parse_choice_accepts_keys_and_positions() {
        assert_eq!(parse_choice::<AgeBand>("65+"), Ok(AgeBand::SixtyFivePlus));
        assert_eq!(parse_choice::<Gender>(" 2 "), Ok(Gender::Female));
    }

    #[test]
    fn parse_choice_lists_options_on_error() {
        let err = parse_choice::<Gender>("0").expect_err("no position zero");
        assert!(err.contains("prefer-not"));
        assert!(parse_choice::<AgeBand>("12-17").is_err());
    }
}
