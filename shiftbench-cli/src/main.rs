//! shiftbench binary entry point.

fn main() -> anyhow::Result<()> {
    shiftbench_cli::run()
}
