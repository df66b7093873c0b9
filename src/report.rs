use itertools::Itertools;
use algo::{Report, State};

/// Final statistics as printed at the end of a run.
pub fn summary(report: &Report, state: State, living: usize) -> String {
  let stop = match state {
    State::Stopped => "Stopping as no cells are live.".to_string(),
    State::Running => format!(
      "Stopping after {} generations with {} cells still live.",
      report.generations, living
    ),
  };

  let mut lines = vec![
    stop,
    format!("Starting cells: {}", report.start_population),
    format!(
      "Total cells killed in killzone: {}, generations: {}",
      report.killzone_kills, report.generations
    ),
  ];
  lines.extend(
    report
      .histogram
      .iter()
      .map(|(age, count)| format!("Cells dead at age: {} : {}", age, count)),
  );

  let mut output = lines.into_iter().join("\n");
  output.push('\n');
  output
}

#[cfg(test)]
mod tests {
  use super::*;
  use algo::KillHistogram;
  use pretty_assertions::assert_eq;

  #[test]
  fn extinct_run() {
    let mut histogram = KillHistogram::new();
    histogram.merge(&[0, 0, 0, 1, 1]);
    let report = Report {
      start_population: 3,
      killzone_kills: 5,
      generations: 2,
      histogram,
    };

    assert_eq!(summary(&report, State::Stopped, 0), "
Stopping as no cells are live.
Starting cells: 3
Total cells killed in killzone: 5, generations: 2
Cells dead at age: 0 : 3
Cells dead at age: 1 : 2
".trim_start());
  }

  #[test]
  fn capped_run() {
    let report = Report {
      start_population: 4,
      killzone_kills: 0,
      generations: 10,
      histogram: KillHistogram::new(),
    };

    assert_eq!(summary(&report, State::Running, 4), "
Stopping after 10 generations with 4 cells still live.
Starting cells: 4
Total cells killed in killzone: 0, generations: 10
".trim_start());
  }
}
