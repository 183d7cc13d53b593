use dnf_rs::compile::{compile, Options};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let expression = "a&(b|(c&o))&(d|e)";
    println!("expression = {}", expression);

    let compiled = compile(expression, &Options::default())?;
    println!("clauses = {}", compiled.dag().count_clauses());
    for clause in compiled.clauses() {
        println!("  {}", clause.join(" & "));
    }

    println!("dot:\n{}", compiled.dag().to_dot()?);

    Ok(())
}
