use commitflow::ui::output;

fn main() {
    let code = match commitflow::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{:#}", err));
            1
        }
    };
    std::process::exit(code);
}
