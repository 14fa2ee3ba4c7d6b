use crate::error::CliError;
use crate::util::{texture_file_name, with_mapped_file, PngSink};
use argh::FromArgs;
use rw_txd::{decode_texture, parse_txd, TextureCatalog, TextureDataChunk};
#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{fs, path::Path, path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Decode textures from a texture dictionary and write them as PNG files
#[argh(subcommand, name = "extract")]
pub struct ExtractCmd {
    /// input .txd file
    #[argh(option)]
    pub input: PathBuf,

    /// output directory path
    #[argh(option)]
    pub output: PathBuf,

    /// only extract the texture with this name (case-insensitive)
    #[argh(option)]
    pub name: Option<String>,
}

pub fn handle_extract_command(cmd: ExtractCmd) -> Result<(), CliError> {
    fs::create_dir_all(&cmd.output)?;
    let start = Instant::now();

    let (written, failed) = with_mapped_file(&cmd.input, |bytes| {
        let file = parse_txd(bytes)?;
        let catalog = TextureCatalog::new(&file);

        let textures: Vec<&TextureDataChunk> = match &cmd.name {
            Some(name) => {
                let texture = catalog
                    .find(name)
                    .and_then(|texture| texture.texture_data())
                    .ok_or_else(|| CliError::TextureNotFound(name.clone()))?;
                vec![texture]
            }
            None => catalog
                .textures()
                .filter_map(|texture| texture.texture_data())
                .collect(),
        };

        // A failing texture is reported and does not stop the others.
        #[cfg(feature = "multithreaded")]
        let results: Vec<_> = textures
            .par_iter()
            .map(|texture| extract_texture(texture, &cmd.output))
            .collect();
        #[cfg(not(feature = "multithreaded"))]
        let results: Vec<_> = textures
            .iter()
            .map(|texture| extract_texture(texture, &cmd.output))
            .collect();

        let mut written = 0;
        let mut failed = 0;
        for result in results {
            match result {
                Ok(()) => written += 1,
                Err(e) => {
                    eprintln!("{e}");
                    failed += 1;
                }
            }
        }
        Ok((written, failed))
    })?;

    println!(
        "Extracted {written} textures ({failed} failed) in {:.2?}",
        start.elapsed()
    );
    Ok(())
}

/// Decodes a single texture and writes it to `<output>/<name>.png`.
fn extract_texture(texture: &TextureDataChunk<'_>, output: &Path) -> Result<(), CliError> {
    let image = decode_texture(texture).map_err(|source| CliError::Decode {
        name: texture.name.clone(),
        source,
    })?;
    let png = image.encode_with(&PngSink).map_err(|source| CliError::Encode {
        name: texture.name.clone(),
        source,
    })?;

    fs::write(output.join(texture_file_name(&texture.name)), png)?;
    Ok(())
}
