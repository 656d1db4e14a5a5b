//! Word cloud renderer
//!
//! Pure data transform from a [`CategoryAnalysis`] to `{text, size}` pairs.
//! Layout and drawing happen client side.

use serde::Serialize;

use crate::app::CategoryAnalysis;
use crate::domain::entities::{Palette, WordCount};

/// One word of the cloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloudEntry {
    pub text: String,
    /// Raw occurrence count; the client scales it to a font size
    pub size: u64,
    /// Palette colour picked by rank
    pub color: &'static str,
}

/// Response body of `POST /analyze`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCloud {
    pub category: String,
    pub palette: Palette,
    pub page_count: usize,
    pub word_cloud_data: Vec<WordCloudEntry>,
    /// Every counted word, not only the top N
    pub word_count: WordCount,
}

/// Response body of `GET /palettes`
#[derive(Debug, Clone, Serialize)]
pub struct PaletteList {
    pub palettes: &'static [Palette],
}

/// Build the word cloud payload from the `top_n` most frequent words
pub fn render_word_cloud(
    analysis: &CategoryAnalysis,
    palette: Palette,
    top_n: usize,
) -> WordCloud {
    let word_cloud_data = analysis
        .word_count
        .most_common(top_n)
        .into_iter()
        .enumerate()
        .map(|(rank, (text, size))| WordCloudEntry {
            text,
            size,
            color: palette.color(rank),
        })
        .collect();

    WordCloud {
        category: analysis.category.name().to_string(),
        palette,
        page_count: analysis.page_count,
        word_cloud_data,
        word_count: analysis.word_count.clone(),
    }
}

pub fn render_palettes() -> PaletteList {
    PaletteList {
        palettes: Palette::all(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Category;

    fn analysis(words: &[&str]) -> CategoryAnalysis {
        CategoryAnalysis {
            category: Category::parse("Category:Volcanoes").unwrap(),
            page_count: 2,
            word_count: words.iter().collect::<WordCount>(),
        }
    }

    #[test]
    fn render_keeps_top_n_in_rank_order() {
        let analysis = analysis(&["lava", "ash", "lava", "magma", "lava", "ash"]);

        let cloud = render_word_cloud(&analysis, Palette::default(), 2);

        assert_eq!(cloud.category, "Volcanoes");
        assert_eq!(cloud.page_count, 2);
        assert_eq!(
            cloud.word_cloud_data,
            vec![
                WordCloudEntry {
                    text: "lava".into(),
                    size: 3,
                    color: "#000000",
                },
                WordCloudEntry {
                    text: "ash".into(),
                    size: 2,
                    color: "#333333",
                },
            ]
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let analysis = analysis(&["lava"]);
        let cloud = render_word_cloud(&analysis, Palette::find("sunset").unwrap(), 10);

        let json = serde_json::to_value(&cloud).unwrap();

        assert_eq!(json["category"], "Volcanoes");
        assert_eq!(json["pageCount"], 2);
        assert_eq!(json["palette"]["name"], "sunset");
        assert_eq!(json["palette"]["colors"][0], "#FF6F00");
        assert_eq!(json["wordCloudData"][0]["text"], "lava");
        assert_eq!(json["wordCloudData"][0]["size"], 1);
        assert_eq!(json["wordCloudData"][0]["color"], "#FF6F00");
        assert_eq!(json["wordCount"]["lava"], 1);
    }

    #[test]
    fn colors_cycle_through_palette_by_rank() {
        let words: Vec<String> = (0..8).map(|i| format!("word{}", i)).collect();
        let analysis = CategoryAnalysis {
            category: Category::parse("Numbers").unwrap(),
            page_count: 1,
            word_count: words.iter().collect(),
        };
        let palette = Palette::find("material").unwrap();

        let cloud = render_word_cloud(&analysis, palette, 8);

        assert_eq!(cloud.word_cloud_data[0].color, palette.colors[0]);
        assert_eq!(cloud.word_cloud_data[5].color, palette.colors[5]);
        assert_eq!(cloud.word_cloud_data[6].color, palette.colors[0]);
    }

    #[test]
    fn word_count_holds_words_beyond_top_n() {
        let analysis = analysis(&["lava", "lava", "ash", "magma"]);

        let cloud = render_word_cloud(&analysis, Palette::default(), 1);

        assert_eq!(cloud.word_cloud_data.len(), 1);
        assert_eq!(cloud.word_count.len(), 3);
        assert_eq!(cloud.word_count.get("magma"), 1);
    }

    #[test]
    fn empty_analysis_renders_empty_list() {
        let cloud = render_word_cloud(&analysis(&[]), Palette::default(), 100);
        assert!(cloud.word_cloud_data.is_empty());
    }

    #[test]
    fn render_palettes_lists_all() {
        let json = serde_json::to_value(render_palettes()).unwrap();
        assert_eq!(json["palettes"].as_array().unwrap().len(), 7);
        assert_eq!(json["palettes"][0]["name"], "default");
    }
}
