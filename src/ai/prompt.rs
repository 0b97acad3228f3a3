/// 渲染情感分析提示词。纯格式化：相同输入必得到逐字节相同的输出。
pub fn build_sentiment_prompt(review_text: &str, rating: i64) -> String {
    format!(
        r#"You are analyzing the sentiment of a mobile app review.
Classify the sentiment as one of: "Positive", "Neutral", or "Negative".
Consider both the rating and the review text in your analysis.

Review text: {review_text}
Rating: {rating} out of 5 stars

Respond with only a single word: Positive, Neutral, or Negative."#
    )
}
