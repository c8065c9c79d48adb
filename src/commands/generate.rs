//! Generate the publications page

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::{CategorySection, Generator};
use crate::Site;

/// Load every configured category and render the page
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let mut sections = Vec::with_capacity(site.config.categories.len());

    for category in &site.config.categories {
        let posts = loader.load_category(&category.dir)?;
        tracing::info!("Loaded {} entries from {}", posts.len(), category.dir);
        sections.push(CategorySection {
            config: category.clone(),
            posts,
        });
    }

    let generator = Generator::new(site)?;
    generator.generate(&sections)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());

    Ok(())
}
