//! The list of available demos.

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use kidcalc_arith::{AdditionDemo, MultiplicationDemo, ShoppingDemo, SubtractionDemo};
use kidcalc_common::Demo;
use kidcalc_validate::ErrorHandlingDemo;

/// Every demo, in lesson order, configured from `config`.
pub fn demos(config: &RunnerConfig) -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(AdditionDemo::new(config.addition.clone())),
        Box::new(SubtractionDemo::new(config.subtraction.clone())),
        Box::new(MultiplicationDemo::new(config.multiplication.clone())),
        Box::new(ShoppingDemo::new(config.shopping.clone())),
        Box::new(ErrorHandlingDemo),
    ]
}

/// Pick demos by id, in the order given.
///
/// An empty id list selects everything. A repeated id runs once, at its
/// first position.
pub fn select(all: Vec<Box<dyn Demo>>, ids: &[String]) -> Result<Vec<Box<dyn Demo>>, RunnerError> {
    if ids.is_empty() {
        return Ok(all);
    }

    let mut slots: Vec<Option<Box<dyn Demo>>> = all.into_iter().map(Some).collect();
    let known: Vec<&'static str> = slots
        .iter()
        .flatten()
        .map(|demo| demo.info().id)
        .collect();

    let mut selected = Vec::with_capacity(ids.len());
    for id in ids {
        let index = known
            .iter()
            .position(|k| *k == id.as_str())
            .ok_or_else(|| RunnerError::UnknownDemo {
                id: id.clone(),
                known: known.iter().map(|k| k.to_string()).collect(),
            })?;
        match slots[index].take() {
            Some(demo) => selected.push(demo),
            None => tracing::debug!(id = %id, "demo already selected"),
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(demos: &[Box<dyn Demo>]) -> Vec<&'static str> {
        demos.iter().map(|d| d.info().id).collect()
    }

    #[test]
    fn test_registry_order() {
        let all = demos(&RunnerConfig::default());
        assert_eq!(
            ids(&all),
            vec!["addition", "subtraction", "multiplication", "shopping", "error-handling"]
        );
    }

    #[test]
    fn test_select_empty_is_all() {
        let all = demos(&RunnerConfig::default());
        let picked = select(all, &[]).unwrap();
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn test_select_keeps_requested_order() {
        let all = demos(&RunnerConfig::default());
        let request = vec!["shopping".to_string(), "addition".to_string(), "shopping".to_string()];
        let picked = select(all, &request).unwrap();
        assert_eq!(ids(&picked), vec!["shopping", "addition"]);
    }

    #[test]
    fn test_select_unknown() {
        let all = demos(&RunnerConfig::default());
        let err = select(all, &["division".to_string()]).err().unwrap();
        let text = err.to_string();
        assert!(text.contains("unknown demo 'division'"));
        assert!(text.contains("error-handling"));
    }
}
