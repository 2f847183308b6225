use std::path::PathBuf;

use glyphpack::{default_presets, generate, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config {
        font_path: PathBuf::from("./JetBrainsMonoNL-Regular.ttf"),
        out_dir: PathBuf::from("rast"),
        prefix: "jb".to_owned(),
        presets: default_presets(),
    };
    let written = generate(&config)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
