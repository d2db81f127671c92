use spinv::controls::ControlPanel;
use spinv::cpu::{Cpu, CYCLE_TIME};
use spinv::interrupts::Interrupts;
use spinv::memory::Memory;
use spinv::ports::PortBank;
use std::io;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// The assembled machine: the state the CPU thread shares with the display
/// front-end, plus the handles needed to start and stop the CPU thread.
pub struct Machine {
    pub memory: Arc<Mutex<Memory>>,
    pub interrupts: Arc<Interrupts>,
    pub controls: Arc<ControlPanel>,
    exit: Arc<AtomicBool>,
    start: Arc<Barrier>,
    cpu_thread: Option<JoinHandle<()>>,
}

impl Machine {
    pub fn new(rom: &[u8]) -> Self {
        let mut memory = Memory::new();
        memory.load_rom(rom);
        Machine {
            memory: Arc::new(Mutex::new(memory)),
            interrupts: Arc::new(Interrupts::new()),
            controls: Arc::new(ControlPanel::new()),
            exit: Arc::new(AtomicBool::new(false)),
            start: Arc::new(Barrier::new(2)), // CPU thread + display
            cpu_thread: None,
        }
    }

    /// Spawns the CPU thread. It parks on the start barrier until
    /// `signal_ready` releases it.
    pub fn start_cpu(&mut self) -> io::Result<()> {
        let memory = Arc::clone(&self.memory);
        let interrupts = Arc::clone(&self.interrupts);
        let controls = Arc::clone(&self.controls);
        let exit = Arc::clone(&self.exit);
        let start = Arc::clone(&self.start);
        let handle = thread::Builder::new()
            .name("cpu".to_string())
            .spawn(move || run_cpu(memory, interrupts, controls, exit, start))?;
        self.cpu_thread = Some(handle);
        Ok(())
    }

    /// Releases the CPU thread once the display front-end is up.
    pub fn signal_ready(&self) {
        self.start.wait();
    }

    /// Cooperative shutdown: raise the exit flag and join the CPU thread.
    pub fn stop(&mut self) {
        self.exit.store(true, Ordering::Relaxed);
        if let Some(handle) = self.cpu_thread.take() {
            if handle.join().is_err() {
                log::error!("CPU thread panicked before shutdown");
            }
        }
    }

    pub fn lock_memory(&self) -> MutexGuard<'_, Memory> {
        lock_memory(&self.memory)
    }
}

fn lock_memory(memory: &Mutex<Memory>) -> MutexGuard<'_, Memory> {
    memory.lock().unwrap_or_else(|poisoned| {
        log::warn!("memory lock poisoned; continuing");
        poisoned.into_inner()
    })
}

/// The driver loop, one iteration per instruction: drain the interrupt
/// latch, execute, then sleep off whatever remains of the instruction's
/// cycle budget against the 2 MHz clock.
fn run_cpu(
    memory: Arc<Mutex<Memory>>,
    interrupts: Arc<Interrupts>,
    controls: Arc<ControlPanel>,
    exit: Arc<AtomicBool>,
    start: Arc<Barrier>,
) {
    let mut cpu = Cpu::new();
    let mut ports = PortBank::new(controls);
    let mut oversleep_warned = false;

    start.wait();

    loop {
        if exit.load(Ordering::Relaxed) {
            break;
        }

        if interrupts.enabled() && interrupts.interrupt_waiting() {
            cpu.stage_interrupt(&interrupts);
        }

        let before = Instant::now();
        let cycles = {
            let mut mem = lock_memory(&memory);
            match cpu.step(&mut mem, &mut ports, &interrupts) {
                Ok(cycles) => cycles,
                Err(error) => {
                    // No recovery path: the program counter cannot be
                    // meaningfully advanced past an unknown opcode.
                    log::error!("CPU fault: {}\n{}", error, cpu);
                    process::exit(1);
                }
            }
        };

        let budget = CYCLE_TIME * cycles;
        match budget.checked_sub(before.elapsed()) {
            Some(remaining) => thread::sleep(remaining),
            None => {
                if !oversleep_warned {
                    log::warn!("host cannot keep up with 2 MHz pacing; emulation will run slow");
                    oversleep_warned = true;
                }
            }
        }
    }
}
