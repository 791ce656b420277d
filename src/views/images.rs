use crate::models::Image;

/// One gallery figure with its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureView {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageGridView {
    #[default]
    Placeholder,
    Figures(Vec<FigureView>),
}

impl ImageGridView {
    pub fn figures(&self) -> &[FigureView] {
        match self {
            ImageGridView::Placeholder => &[],
            ImageGridView::Figures(figures) => figures,
        }
    }
}

/// Rebuild the image gallery from scratch.
pub fn render(images: &[Image]) -> ImageGridView {
    if images.is_empty() {
        return ImageGridView::Placeholder;
    }

    let figures = images
        .iter()
        .map(|image| FigureView {
            url: image.url.clone(),
            caption: caption(image),
        })
        .collect();

    ImageGridView::Figures(figures)
}

fn caption(image: &Image) -> String {
    match image.alt.as_deref().map(str::trim).filter(|alt| !alt.is_empty()) {
        Some(alt) => format!("{alt} • {}", image.context.label()),
        None => image.context.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageContext;

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render(&[]), ImageGridView::Placeholder);
    }

    #[test]
    fn caption_joins_alt_and_context_label() {
        let grid = render(&[Image {
            url: "http://example.com/shoe.png".to_string(),
            alt: Some("Red shoe".to_string()),
            context: ImageContext::Product,
        }]);
        assert_eq!(grid.figures()[0].caption, "Red shoe • product image");
    }

    #[test]
    fn caption_without_alt_is_just_the_context_label() {
        let grid = render(&[Image {
            url: "http://example.com/banner.png".to_string(),
            alt: None,
            context: ImageContext::General,
        }]);
        assert_eq!(grid.figures()[0].caption, "general image");
    }

    #[test]
    fn blank_alt_counts_as_missing() {
        let grid = render(&[Image {
            url: "http://example.com/banner.png".to_string(),
            alt: Some("   ".to_string()),
            context: ImageContext::Product,
        }]);
        assert_eq!(grid.figures()[0].caption, "product image");
    }
}
