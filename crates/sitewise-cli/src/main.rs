mod command;
mod sample;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
