//! match-runner: headless driver for the match predictor.
//!
//! Usage:
//!   match-runner --employee emp3 --client client1
//!   match-runner --seed 42 --compare client3
//!   match-runner --matrix --data-dir ./data
//!   match-runner --seed 42 --ipc-mode

use anyhow::Result;
use matchplan_core::{
    planner::{self, MatchCandidate, MatrixRow},
    rng::{EntropyRng, RngBank, StreamRng, StreamSlot, UniformSource},
    types::Money,
    Client, Employee, MatchPredictor, PredictorConfig, Prediction, ProfileStore,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Predict { employee_id: String, client_id: String },
    Compare { client_id: String },
    Matrix,
    ListEmployees,
    ListClients,
    Quit,
}

#[derive(serde::Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
enum Payload<'a> {
    Prediction(Prediction),
    Comparison(Vec<MatchCandidate>),
    Matrix(Vec<MatrixRow>),
    Employees(&'a [Employee]),
    Clients(&'a [Client]),
}

#[derive(serde::Serialize)]
struct Response<'a> {
    generated_at: String,
    #[serde(flatten)]
    payload: Payload<'a>,
}

/// One random source per planner surface. Seeded runs draw from
/// separate RngBank slots; unseeded runs share OS entropy.
enum Sources {
    Seeded {
        predictor: StreamRng,
        comparison: StreamRng,
        matrix: StreamRng,
    },
    Entropy(EntropyRng),
}

impl Sources {
    fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                let bank = RngBank::new(seed);
                Self::Seeded {
                    predictor: bank.for_slot(StreamSlot::Predictor),
                    comparison: bank.for_slot(StreamSlot::Comparison),
                    matrix: bank.for_slot(StreamSlot::HistoricalMatrix),
                }
            }
            None => Self::Entropy(EntropyRng::new()),
        }
    }

    fn get(&mut self, slot: StreamSlot) -> &mut dyn UniformSource {
        match self {
            Self::Seeded { predictor, comparison, matrix } => match slot {
                StreamSlot::Predictor => predictor as &mut dyn UniformSource,
                StreamSlot::Comparison => comparison as &mut dyn UniformSource,
                StreamSlot::HistoricalMatrix => matrix as &mut dyn UniformSource,
            },
            Self::Entropy(rng) => rng as &mut dyn UniformSource,
        }
    }
}

/// Adapter so a `&mut dyn UniformSource` can be passed where
/// `&mut impl UniformSource` is expected.
struct DynSource<'a>(&'a mut dyn UniformSource);

impl UniformSource for DynSource<'_> {
    fn next_f64(&mut self) -> f64 {
        self.0.next_f64()
    }
}

struct Runner {
    store: ProfileStore,
    predictor: MatchPredictor,
    sources: Sources,
}

impl Runner {
    fn predict(&mut self, employee_id: &str, client_id: &str) -> Result<Prediction> {
        let mut rng = DynSource(self.sources.get(StreamSlot::Predictor));
        Ok(self.predictor.predict_ids(&self.store, employee_id, client_id, &mut rng)?)
    }

    fn compare(&mut self, client_id: &str) -> Result<Vec<MatchCandidate>> {
        let mut rng = DynSource(self.sources.get(StreamSlot::Comparison));
        Ok(planner::compare_employees(&self.store, &self.predictor, client_id, &mut rng)?)
    }

    fn matrix(&mut self) -> Vec<MatrixRow> {
        let mut rng = DynSource(self.sources.get(StreamSlot::HistoricalMatrix));
        planner::performance_matrix(&self.store, &mut rng)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_seed(&args);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let store = match arg_value(&args, "--data-dir") {
        Some(dir) => ProfileStore::load(dir)?,
        None => ProfileStore::demo(),
    };
    let config = match arg_value(&args, "--config") {
        Some(path) => PredictorConfig::load(path)?,
        None => PredictorConfig::default(),
    };
    let predictor = MatchPredictor::new(config)?;

    let mut runner = Runner {
        store,
        predictor,
        sources: Sources::new(seed),
    };

    if ipc_mode {
        let stdin = io::stdin();
        return run_ipc_loop(&mut runner, stdin.lock(), io::stdout());
    }

    println!("Match Runner");
    match seed {
        Some(seed) => println!("  seed:      {seed}"),
        None => println!("  seed:      (entropy)"),
    }
    println!("  employees: {}", runner.store.list_employees().len());
    println!("  clients:   {}", runner.store.list_clients().len());
    println!();

    let mut did_something = false;

    if let (Some(employee_id), Some(client_id)) = (arg_value(&args, "--employee"), arg_value(&args, "--client")) {
        let prediction = runner.predict(employee_id, client_id)?;
        print_prediction(&runner, employee_id, client_id, &prediction);
        did_something = true;
    }

    if let Some(client_id) = arg_value(&args, "--compare") {
        let candidates = runner.compare(client_id)?;
        print_comparison(client_id, &candidates);
        did_something = true;
    }

    if args.iter().any(|a| a == "--matrix") {
        print_matrix(&runner.matrix());
        did_something = true;
    }

    if !did_something {
        println!("Nothing to do: pass --employee and --client, --compare, --matrix or --ipc-mode.");
    }
    Ok(())
}

/// One JSON command per input line, one JSON line per answer.
/// Stops on `quit` or EOF; bad lines get an `{"error": ..}` reply.
fn run_ipc_loop(runner: &mut Runner, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        };

        let payload = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Predict { employee_id, client_id } => {
                runner.predict(&employee_id, &client_id).map(Payload::Prediction)
            }
            IpcCommand::Compare { client_id } => runner.compare(&client_id).map(Payload::Comparison),
            IpcCommand::Matrix => Ok(Payload::Matrix(runner.matrix())),
            IpcCommand::ListEmployees => Ok(Payload::Employees(runner.store.list_employees())),
            IpcCommand::ListClients => Ok(Payload::Clients(runner.store.list_clients())),
        };

        match payload {
            Ok(payload) => {
                let response = Response {
                    generated_at: chrono::Utc::now().to_rfc3339(),
                    payload,
                };
                writeln!(output, "{}", serde_json::to_string(&response)?)?;
            }
            Err(e) => {
                log::warn!("ipc command rejected: {e}");
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn print_prediction(runner: &Runner, employee_id: &str, client_id: &str, p: &Prediction) {
    let config = runner.predictor.config();
    let trend = if p.is_trending_up(config) { "up" } else { "down" };

    println!("=== PREDICTED OUTCOME: {employee_id} -> {client_id} ===");
    println!("  recommendation: {}", p.recommendation.label());
    println!("  success rate:   {}% ({trend})", p.success_rate);
    println!("  deal value:     ${}K", round_div(p.deal_value, 1000));
    println!("  adj. value:     ${}K", round_div(p.deal_value.saturating_mul(p.success_rate as Money), 100_000));
    println!("  time to close:  {}", p.time_to_close);
    println!();
    println!("  Identified risks:");
    for risk in &p.risks {
        println!("    - {risk}");
    }
    println!("  Key opportunities:");
    for opp in &p.opportunities {
        println!("    - {opp}");
    }
    println!("  Strategic recommendations:");
    for line in p.recommendation.guidance() {
        println!("    - {line}");
    }
    println!();
}

fn print_comparison(client_id: &str, candidates: &[MatchCandidate]) {
    println!("=== EMPLOYEE COMPARISON: {client_id} ===");
    for (rank, c) in candidates.iter().enumerate() {
        println!(
            "  {:>2}. {:<16} {:>3}% | {}",
            rank + 1,
            c.employee_name,
            c.prediction.success_rate,
            c.prediction.recommendation.label()
        );
    }
    println!();
}

fn print_matrix(rows: &[MatrixRow]) {
    println!("=== HISTORICAL PERFORMANCE MATRIX ===");
    println!(
        "  {:<16} {:>10} {:>13} {:>15} {:>8}",
        "Employee", "Analytical", "Relationship", "Direct/Results", "Overall"
    );
    for r in rows {
        println!(
            "  {:<16} {:>9}% {:>12}% {:>14}% {:>7}%",
            r.employee_name, r.analytical, r.relationship_driven, r.direct_results, r.overall
        );
    }
    println!();
}

/// Integer division rounding half up, as the dashboard's `$...K` figures do.
fn round_div(value: Money, divisor: Money) -> Money {
    value.saturating_add(divisor / 2) / divisor
}

/// `--seed` value, if present and valid. An unparsable seed falls back
/// to entropy with a warning.
fn parse_seed(args: &[String]) -> Option<u64> {
    let raw = arg_value(args, "--seed")?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring --seed {raw:?} ({e}); run will not be reproducible");
            None
        }
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn seeded_runner(seed: u64) -> Runner {
        Runner {
            store: ProfileStore::demo(),
            predictor: MatchPredictor::default(),
            sources: Sources::new(Some(seed)),
        }
    }

    fn run_lines(runner: &mut Runner, input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        run_ipc_loop(runner, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn ipc_session_answers_each_command_and_stops_at_quit() {
        let input = concat!(
            r#"{"type": "predict", "employee_id": "emp3", "client_id": "client1"}"#, "\n",
            "garbage\n",
            r#"{"type": "predict", "employee_id": "", "client_id": "client1"}"#, "\n",
            r#"{"type": "compare", "client_id": "client3"}"#, "\n",
            r#"{"type": "quit"}"#, "\n",
            r#"{"type": "list_clients"}"#, "\n",
        );
        let lines = run_lines(&mut seeded_runner(42), input);
        assert_eq!(lines.len(), 4, "expected one line per command before quit: {lines:?}");

        let prediction = &lines[0];
        assert_eq!(prediction["kind"], "prediction");
        assert_eq!(prediction["data"]["risks"].as_array().unwrap().len(), 3);
        assert_eq!(prediction["data"]["recommendation"], "recommended");
        let stamp = prediction["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "bad timestamp {stamp}");

        assert!(lines[1]["error"].is_string());
        assert!(lines[1].get("kind").is_none());

        assert_eq!(lines[2]["error"], "Invalid input: no employee selected");

        assert_eq!(lines[3]["kind"], "comparison");
        let rates: Vec<u64> = lines[3]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["prediction"]["successRate"].as_u64().unwrap())
            .collect();
        assert_eq!(rates.len(), 4);
        assert!(rates.windows(2).all(|w| w[0] >= w[1]), "not ranked: {rates:?}");
    }

    #[test]
    fn ipc_session_ends_at_eof() {
        let input = "\n{\"type\": \"list_employees\"}\n";
        let lines = run_lines(&mut seeded_runner(7), input);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["kind"], "employees");
        assert_eq!(lines[0]["data"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn seeded_sessions_replay() {
        let input = "{\"type\": \"matrix\"}\n";
        let a = run_lines(&mut seeded_runner(99), input);
        let b = run_lines(&mut seeded_runner(99), input);
        assert_eq!(a[0]["data"], b[0]["data"]);
    }

    #[test]
    fn thousands_round_half_up() {
        assert_eq!(round_div(449_600, 1000), 450);
        assert_eq!(round_div(449_499, 1000), 449);
        // 640_000 * 73% = 467_200
        assert_eq!(round_div(640_000 * 73, 100_000), 467);
        assert_eq!(round_div(616_000 * 73, 100_000), 450);
    }

    #[test]
    fn seed_flag_parsing() {
        let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(parse_seed(&args(&["match-runner", "--seed", "42"])), Some(42));
        assert_eq!(parse_seed(&args(&["match-runner", "--seed", "abc"])), None);
        assert_eq!(parse_seed(&args(&["match-runner"])), None);
    }
}
