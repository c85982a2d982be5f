pub const HELP: &str = "
Δ% Calculator Usage:
  Interactive mode: Just run the program
  Command line mode: delta_calc <value1> <value2>

Commands (interactive mode):
  h or H - Show this help
  q or Q - Quit the program

Formula: Δ% = (1 - smaller/larger) × 100
Example: 3.58 vs 4.23 → Δ% = (1 - 3.58/4.23) × 100 = 15.37%";

pub const WELCOME_TEXT: &str = "Δ% Calculator - Enter 'q' to quit, 'h' for help";
