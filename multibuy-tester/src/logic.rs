use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::PageScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &(dyn PageScenario + Send + Sync),
        iterations: usize,
    ) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name().bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match scenario.run_logic() {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);

                    if self.verbose {
                        println!("  ✅ Iteration {}/{} passed ({duration:?})", i + 1, iterations);
                    }
                }
                Err(err) => {
                    failures.push(format!("Iteration {}: {err:#}", i + 1));

                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            err.to_string().red()
                        );
                    }
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations
            .iter()
            .map(std::time::Duration::as_millis)
            .collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioCtx;
    use anyhow::Result;
    use thirtyfour::prelude::*;

    struct FixedScenario {
        fail_message: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl PageScenario for FixedScenario {
        fn name(&self) -> &'static str {
            "Fixed Scenario"
        }

        fn describe(&self) -> &'static str {
            "test double"
        }

        fn run_logic(&self) -> Result<()> {
            match self.fail_message {
                Some(message) => anyhow::bail!(message),
                None => Ok(()),
            }
        }

        async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
            anyhow::bail!("browser path unused in logic tests")
        }
    }

    #[test]
    fn passing_iterations_are_counted_and_timed() {
        let tester = LogicTester::new(false);
        let scenario = FixedScenario { fail_message: None };
        let result = tester.run_scenario(&scenario, 3);
        assert!(result.passed);
        assert_eq!(result.iterations_run, 3);
        assert_eq!(result.successful_iterations, 3);
        assert!(result.failures.is_empty());
        assert_eq!(result.performance_data.len(), 3);
    }

    #[test]
    fn failures_record_the_iteration_index() {
        let tester = LogicTester::new(false);
        let scenario = FixedScenario {
            fail_message: Some("boom"),
        };
        let result = tester.run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("Iteration 1"));
        assert!(result.failures[0].contains("boom"));
        assert!(result.failures[1].contains("Iteration 2"));
    }

    #[test]
    fn zero_iterations_produce_an_empty_passing_result() {
        let tester = LogicTester::new(false);
        let scenario = FixedScenario { fail_message: None };
        let result = tester.run_scenario(&scenario, 0);
        assert!(result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
        assert!(result.performance_data.is_empty());
    }

    #[test]
    fn durations_serialize_as_milliseconds() {
        let result = ScenarioResult {
            scenario_name: "Fixed Scenario".to_string(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(json.contains(r#""average_duration":12"#));
        assert!(json.contains(r#""performance_data":[12]"#));

        let back: ScenarioResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.average_duration, Duration::from_millis(12));
        assert_eq!(back.performance_data, vec![Duration::from_millis(12)]);
    }
}
