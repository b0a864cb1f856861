use anyhow::Result;
use catalogue_core::{Catalogue, CatalogueConfig};

pub(super) fn serve(config: &CatalogueConfig, host: &str, port: u16) -> Result<()> {
    tracing::info!(
        data_root = %config.data_root.display(),
        search_mode = config.search_mode.as_str(),
        "starting catalogue api"
    );
    catalogue_web::serve_web(Catalogue::from_config(config), host, port)
}
