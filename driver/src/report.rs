use log::{debug, info};

use edgecast_geometry::{Point, find_intercept};

use crate::config::Configuration;

/// One line per touch that has an intercept, in input order.
///
/// With `show_missing`, touches without an intercept are reported too.
pub fn report(config: &Configuration, show_missing: bool) -> Vec<String> {
    let lines: Vec<String> = config
        .touches
        .iter()
        .filter_map(|&touch| {
            let intercept = find_intercept(config.source, touch, &config.bounds);
            match intercept {
                Some(intercept) => Some(line(config.source, touch, &intercept.to_string())),
                None => {
                    debug!("No intercept for touch {touch}");
                    show_missing.then(|| line(config.source, touch, "none"))
                }
            }
        })
        .collect();

    info!(
        "Reported {} of {} touches",
        lines.len(),
        config.touches.len()
    );
    lines
}

fn line(source: Point, touch: Point, intercept: &str) -> String {
    format!("source: {source} Touch: {touch} Intercept: {intercept}")
}
