//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Site;

/// Print every category's entries, newest first
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);

    for category in &site.config.categories {
        let posts = loader.load_category(&category.dir)?;
        println!("{} ({}):", category.title, posts.len());
        for post in posts {
            println!("  {} - {} [{}]", post.date, post.title, post.slug);
        }
    }

    Ok(())
}
