mod catalog;
mod cli;
mod generator;
mod logging;
mod sanitize;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    generator::run(app)
}
