//! Simulator backend implementation.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use unravel_hal::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, BackendSpec, Capabilities,
    Counts, ExecutionResult, HalError, HalResult, Job, JobId, JobStatus, SimulationMethod,
    ValidationResult,
};
use unravel_ir::{Circuit, InstructionKind};

use crate::statevector::{Sampler, Statevector};

/// Default qubit limit of a simulator instance.
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator behind one of the provider backend names.
///
/// The [`SimulationMethod`] of the backend spec decides how shots are
/// produced. Jobs run to completion inside `submit`; the job table only
/// records their lifecycle.
pub struct SimulatorBackend {
    spec: &'static BackendSpec,
    capabilities: Capabilities,
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a simulator for a provider backend.
    pub fn from_spec(spec: &'static BackendSpec) -> Self {
        Self {
            spec,
            capabilities: Self::capabilities_for(spec, DEFAULT_MAX_QUBITS),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Make sampling reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Change the qubit limit.
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.capabilities = Self::capabilities_for(self.spec, max_qubits);
        self
    }

    /// The provider backend this simulator stands in for.
    pub fn spec(&self) -> &'static BackendSpec {
        self.spec
    }

    fn capabilities_for(spec: &BackendSpec, max_qubits: u32) -> Capabilities {
        Capabilities::simulator(spec.name, max_qubits).with_feature(spec.method.to_string())
    }

    /// Reasons `circuit` cannot run here; empty when it can.
    fn check(&self, circuit: &Circuit) -> Vec<String> {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but {} supports at most {}",
                circuit.num_qubits(),
                self.spec.name,
                self.capabilities.num_qubits
            ));
        }

        if !circuit.instructions().iter().any(|inst| inst.is_measure()) {
            reasons.push("circuit has no measurements".into());
        }

        for gate in circuit.gates().filter_map(|inst| inst.as_gate()) {
            if !self.capabilities.gate_set.contains(gate.name()) {
                reasons.push(format!("gate '{}' is not supported", gate.name()));
            }
        }

        if self.spec.method == SimulationMethod::Statevector
            && !circuit.has_terminal_measurements_only()
        {
            reasons.push(format!(
                "{} samples the final state and cannot apply gates after a measurement",
                self.spec.name
            ));
        }

        reasons
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, SimJob>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, job_id: &JobId, status: JobStatus, result: Option<ExecutionResult>) {
        let mut jobs = self.lock_jobs();
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            sim_job.job.transition(status);
            debug!(job = %job_id, status = %sim_job.job.status, "simulator job updated");
            if sim_job.job.status == JobStatus::Completed {
                sim_job.result = result;
            }
        }
    }
}

/// Run the simulation synchronously.
#[instrument(skip(spec, circuit, rng), fields(backend = spec.name))]
fn run_simulation(
    spec: &'static BackendSpec,
    circuit: &Circuit,
    shots: u32,
    rng: &mut StdRng,
) -> ExecutionResult {
    let start = Instant::now();
    debug!(
        "Starting simulation: {} qubits, {} shots, method {}",
        circuit.num_qubits(),
        shots,
        spec.method
    );

    let counts = match spec.method {
        SimulationMethod::Shots => simulate_per_shot(circuit, shots, rng),
        SimulationMethod::Statevector => simulate_final_state(circuit, shots, rng),
    };

    let elapsed = start.elapsed();
    debug!("Simulation completed in {:?}", elapsed);

    ExecutionResult::new(counts, shots)
        .with_execution_time(elapsed.as_millis() as u64)
        .with_metadata("backend", spec.name.into())
        .with_metadata("method", spec.method.to_string().into())
}

/// Classical register readout, clbit `n-1` leftmost.
fn readout(register: &[bool]) -> String {
    register
        .iter()
        .rev()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

/// Re-run the whole circuit for every shot, collapsing at each measurement.
fn simulate_per_shot(circuit: &Circuit, shots: u32, rng: &mut StdRng) -> Counts {
    let mut counts = Counts::new();
    let mut register = vec![false; circuit.num_clbits()];

    for _ in 0..shots {
        let mut sv = Statevector::new(circuit.num_qubits());
        register.fill(false);

        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Gate(gate) => {
                    let qubits: Vec<_> = inst.qubits.iter().map(|q| q.index()).collect();
                    sv.apply_gate(gate, &qubits);
                }
                InstructionKind::Measure => {
                    for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                        register[c.index()] = sv.measure(q.index(), rng);
                    }
                }
                InstructionKind::Barrier => {}
            }
        }

        counts.insert(readout(&register), 1);
    }

    counts
}

/// Evolve once, then sample the final distribution `shots` times.
///
/// Only valid when every measurement is terminal.
fn simulate_final_state(circuit: &Circuit, shots: u32, rng: &mut StdRng) -> Counts {
    let mut sv = Statevector::new(circuit.num_qubits());
    let mut wiring = vec![];

    for inst in circuit.instructions() {
        match &inst.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = inst.qubits.iter().map(|q| q.index()).collect();
                sv.apply_gate(gate, &qubits);
            }
            InstructionKind::Measure => {
                wiring.extend(inst.qubits.iter().zip(&inst.clbits).map(|(q, c)| (q.index(), c.index())));
            }
            InstructionKind::Barrier => {}
        }
    }

    let sampler = Sampler::new(&sv);
    let mut by_index: FxHashMap<usize, u64> = FxHashMap::default();
    for _ in 0..shots {
        *by_index.entry(sampler.sample(rng)).or_insert(0) += 1;
    }

    let mut register = vec![false; circuit.num_clbits()];
    by_index
        .into_iter()
        .map(|(index, count)| {
            register.fill(false);
            for &(q, c) in &wiring {
                register[c] = (index >> q) & 1 == 1;
            }
            (readout(&register), count)
        })
        .collect()
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let reasons = self.check(circuit);
        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit), fields(backend = self.spec.name))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested, {} accepts 1..={}",
                self.spec.name, self.capabilities.max_shots
            )));
        }
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        let reasons = self.check(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), circuit.name(), self.spec.name, shots);
        self.lock_jobs()
            .insert(job_id.0.clone(), SimJob { job, result: None });
        debug!("Submitted job: {}", job_id);

        // A per-job generator keeps seeded runs reproducible.
        let job_seed: u64 = self.rng.lock().unwrap_or_else(PoisonError::into_inner).r#gen();
        let mut rng = StdRng::seed_from_u64(job_seed);

        self.update(&job_id, JobStatus::Running, None);

        // CPU-bound: run on the blocking pool.
        let spec = self.spec;
        let circuit = circuit.clone();
        let outcome =
            tokio::task::spawn_blocking(move || run_simulation(spec, &circuit, shots, &mut rng))
                .await;
        match outcome {
            Ok(result) => self.update(&job_id, JobStatus::Completed, Some(result)),
            Err(e) => self.update(
                &job_id,
                JobStatus::Failed(format!("simulation task failed: {e}")),
                None,
            ),
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        self.lock_jobs()
            .get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self.lock_jobs();
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        match &sim_job.job.status {
            JobStatus::Completed => sim_job
                .result
                .clone()
                .ok_or_else(|| HalError::Backend(format!("job {job_id} has no result"))),
            JobStatus::Failed(msg) => Err(HalError::JobFailed(msg.clone())),
            JobStatus::Cancelled => Err(HalError::JobCancelled),
            status => Err(HalError::Backend(format!("job {job_id} is still {status}"))),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.lock_jobs();
        let sim_job = jobs
            .get_mut(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        sim_job.job.transition(JobStatus::Cancelled);
        Ok(())
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let spec = BackendSpec::find(&config.name).ok_or_else(|| {
            HalError::Configuration(format!("'{}' is not a simulator backend", config.name))
        })?;

        let mut backend = Self::from_spec(spec);
        if let Some(max_qubits) = config.extra_u64("max_qubits")? {
            let max_qubits = u32::try_from(max_qubits).map_err(|_| {
                HalError::Configuration(format!("max_qubits {max_qubits} is out of range"))
            })?;
            backend = backend.with_max_qubits(max_qubits);
        }
        if let Some(seed) = config.extra_u64("seed")? {
            backend = backend.with_seed(seed);
        }
        Ok(backend)
    }
}
