mod app;
mod config;
mod logic;
mod models;
mod mvu;
mod ui;

fn main() -> anyhow::Result<()> {
    app::run()
}
