//! ProfileStore holds the read-only roster of employees and clients.
//!
//! Records are validated once on construction and never mutated.
//! Use `ProfileStore::demo()` for the built-in roster, or
//! `ProfileStore::load(data_dir)` to read it from JSON.

use crate::{
    error::{PlanError, PlanResult},
    profile::{Client, Difficulty, Employee, Priority},
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

#[derive(Debug, Clone, Deserialize)]
struct ClientsFile {
    clients: Vec<Client>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    employees: Vec<Employee>,
    clients: Vec<Client>,
}

impl ProfileStore {
    pub fn new(employees: Vec<Employee>, clients: Vec<Client>) -> PlanResult<Self> {
        for e in &employees {
            e.validate()?;
        }
        for c in &clients {
            c.validate()?;
        }
        check_unique("employee", employees.iter().map(|e| e.id.as_str()))?;
        check_unique("client", clients.iter().map(|c| c.id.as_str()))?;
        Ok(Self { employees, clients })
    }

    /// Load `employees.json` and `clients.json` from a data directory.
    pub fn load(data_dir: impl AsRef<Path>) -> PlanResult<Self> {
        let dir = data_dir.as_ref();

        let emp_path = dir.join("employees.json");
        let emp_content = PlanError::read_file(&emp_path)?;
        let emp_file: EmployeesFile = serde_json::from_str(&emp_content)?;

        let client_path = dir.join("clients.json");
        let client_content = PlanError::read_file(&client_path)?;
        let client_file: ClientsFile = serde_json::from_str(&client_content)?;

        let store = Self::new(emp_file.employees, client_file.clients)?;
        log::info!(
            "profile store loaded from {}: {} employees, {} clients",
            dir.display(),
            store.employees.len(),
            store.clients.len()
        );
        Ok(store)
    }

    pub fn list_employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn list_clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn employee(&self, id: &str) -> PlanResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| PlanError::EmployeeNotFound { id: id.to_string() })
    }

    pub fn client(&self, id: &str) -> PlanResult<&Client> {
        self.clients
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| PlanError::ClientNotFound { id: id.to_string() })
    }

    /// The built-in sales team and client book.
    pub fn demo() -> Self {
        Self {
            employees: vec![
                demo_employee("emp1", "Alex Chen", "AC", 87, &["Body Language", "Tone"], &["Question Ratio"]),
                demo_employee("emp2", "Maria Garcia", "MG", 92, &["Content", "Persuasiveness"], &["Time Management"]),
                demo_employee("emp3", "James Wilson", "JW", 78, &["Negotiation", "Strategy"], &["Body Language"]),
                demo_employee("emp4", "Priya Patel", "PP", 94, &["All-around"], &["Advanced Tactics"]),
            ],
            clients: vec![
                Client {
                    id: "client1".into(),
                    name: "TechCorp Industries".into(),
                    priority: Priority::High,
                    deal_value: 450_000,
                    difficulty: Difficulty::Hard,
                    personality: "Analytical, data-driven, skeptical".into(),
                },
                Client {
                    id: "client2".into(),
                    name: "Global Solutions Ltd".into(),
                    priority: Priority::Medium,
                    deal_value: 280_000,
                    difficulty: Difficulty::Medium,
                    personality: "Relationship-focused, collaborative".into(),
                },
                Client {
                    id: "client3".into(),
                    name: "Innovate Systems".into(),
                    priority: Priority::High,
                    deal_value: 620_000,
                    difficulty: Difficulty::Hard,
                    personality: "Direct, results-oriented, impatient".into(),
                },
            ],
        }
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> PlanResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PlanError::invalid(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

fn demo_employee(
    id: &str,
    name: &str,
    avatar: &str,
    score: u32,
    strengths: &[&str],
    weaknesses: &[&str],
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        avatar: avatar.into(),
        score,
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
    }
}
