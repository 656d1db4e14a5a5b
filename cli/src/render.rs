//! Plain-text rendering of analysis results

use crate::client::WordCloud;

/// Render the `top` most frequent words as `word: count` lines
pub fn render_top_words(cloud: &WordCloud, top: usize) -> String {
    let mut buf = String::new();

    let shown = cloud.word_cloud_data.len().min(top);
    buf.push_str(&format!(
        "Category '{}': {} pages analyzed\n\n",
        cloud.category, cloud.page_count
    ));

    if shown == 0 {
        buf.push_str("_No words found._\n");
        return buf;
    }

    buf.push_str(&format!("Top {} most frequent non-common words:\n", shown));
    for entry in cloud.word_cloud_data.iter().take(top) {
        buf.push_str(&format!("{}: {}\n", entry.text, entry.size));
    }

    buf
}
