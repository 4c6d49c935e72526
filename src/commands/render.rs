use crate::{RenderArgs, config::Config, page::PageComposer};

pub fn run(args: &RenderArgs, config: &Config) -> Result<(), anyhow::Error> {
    let composer = PageComposer::from_config(config)?;
    let page = composer.compose()?;

    match &args.output {
        Some(output) => {
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(output, &page)?;
            tracing::info!(
                document = %composer.source().path().display(),
                output = %output.display(),
                bytes = page.len(),
                "wrote page"
            );
        }
        None => print!("{page}"),
    }

    Ok(())
}
