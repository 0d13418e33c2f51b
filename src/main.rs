use std::env;
use std::process;

fn main() {
    env_logger::init();

    let data_folder = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("Cannot resolve working directory: {}", e);
            process::exit(1);
        }
    };

    if !pass_forge::run(&data_folder) {
        process::exit(1);
    }
}
