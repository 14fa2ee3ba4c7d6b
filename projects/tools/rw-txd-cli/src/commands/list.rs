use crate::error::CliError;
use crate::util::with_mapped_file;
use argh::FromArgs;
use rw_txd::{parse_txd, TextureCatalog};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// List the textures in a texture dictionary
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// input .txd file
    #[argh(option)]
    pub input: PathBuf,
}

pub fn handle_list_command(cmd: ListCmd) -> Result<(), CliError> {
    with_mapped_file(&cmd.input, |bytes| {
        let file = parse_txd(bytes)?;
        let catalog = TextureCatalog::new(&file);

        println!(
            "{}: {} textures (RenderWare {})",
            cmd.input.display(),
            catalog.len(),
            file.metadata().rw_version.unwrap_or("unknown")
        );

        for data in catalog.textures().filter_map(|texture| texture.texture_data()) {
            println!(
                "{:<32} {:<10} {:>5}x{:<5} {} levels",
                data.name, data.format_label, data.width, data.height, data.mipmap_count
            );
        }

        if let Some(stopped) = file.stopped_at {
            println!(
                "Stopped at unrecognised chunk {:#x} (offset {:#x})",
                stopped.id, stopped.offset
            );
        }
        Ok(())
    })
}
