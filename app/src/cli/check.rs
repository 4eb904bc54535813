use std::path::PathBuf;

use variant_lang_driver::Database;

#[derive(clap::Args)]
pub struct Args {
    #[clap(value_parser, value_name = "FILE")]
    filepath: PathBuf,
}

pub fn exec(cmd: Args) -> miette::Result<()> {
    let mut db = Database::from_filesystem();
    let uri = db.resolve_path(&cmd.filepath)?;
    let _ = db.checked(&uri).map_err(|err| db.pretty_error(&uri, err))?;
    println!("{} checked successfully!", cmd.filepath.display());
    Ok(())
}
