/// `folio-check`: load a gallery manifest (and optionally a page config) and
/// print what every group/category combination would show.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio::config::PageConfig;
    use folio::logging::init_logging;

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("Usage: folio-check [--config <page-config.json>] <gallery-manifest.json>");
        return;
    }

    let config = match args.opt_value_from_str::<_, std::path::PathBuf>("--config") {
        Ok(Some(path)) => match PageConfig::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(1);
            }
        },
        Ok(None) => PageConfig::default(),
        Err(e) => {
            eprintln!("Invalid --config: {}", e);
            std::process::exit(2);
        }
    };
    init_logging(config.log_level);

    let manifest_path: std::path::PathBuf = match args.free_from_str() {
        Ok(path) => path,
        Err(_) => {
            eprintln!("Usage: folio-check [--config <page-config.json>] <gallery-manifest.json>");
            std::process::exit(2);
        }
    };

    if let Err(e) = check::run(&manifest_path, &config) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod check {
    use std::path::Path;

    use folio::PageError;
    use folio::config::PageConfig;
    use folio::manifest::GalleryManifest;
    use folio_gallery::{CategoryFilter, GallerySelector};

    pub fn run(path: &Path, config: &PageConfig) -> Result<(), PageError> {
        let manifest = GalleryManifest::load_from_path(path)?;
        let catalog = manifest.to_catalog()?;
        log::info!("📂 Loaded {} gallery items from {:?}", catalog.len(), path);

        let Some(initial) = manifest.initial_group(&catalog) else {
            println!("Gallery is empty");
            return Ok(());
        };
        println!("✓ {} items, initial group {}", catalog.len(), initial);

        let mut selector =
            GallerySelector::new(catalog.clone(), initial).with_stagger_step(config.gallery.stagger_step());

        for group in catalog.groups() {
            selector.set_category_filter(CategoryFilter::All);
            let change = selector.set_group(group.clone());
            println!("\n{} ({} items)", group, change.shown.len());

            let mut filters = vec![CategoryFilter::All];
            filters.extend(
                catalog
                    .categories(&group)
                    .into_iter()
                    .map(CategoryFilter::Category),
            );
            for filter in filters {
                selector.set_category_filter(filter.clone());
                let visible = selector.visible_set();
                let ids: Vec<&str> = visible.iter().map(|item| item.id.as_str()).collect();
                println!("  {:<12} {}", filter.as_str(), ids.join(", "));
            }
        }

        Ok(())
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
