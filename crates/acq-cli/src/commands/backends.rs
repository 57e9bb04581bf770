//! Backends command implementation.

use console::style;

use acq_hal::available_backends;

/// Execute the backends command.
pub fn execute() {
    println!("{} Available backends:\n", style("AC Quantum").cyan().bold());

    for info in available_backends() {
        println!(
            "  {} {} {}",
            style("●").green(),
            style(info.backend_type).bold(),
            if info.simulator { "(simulator)" } else { "(device)" }
        );
        println!("    Qubits: {}", info.num_qubits);
        println!("    Max shots: {}", info.max_shots);
        println!("    Gates: {}", info.basis_gates.join(", "));
        println!();
    }
}
