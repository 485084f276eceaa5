use wordexporter::{parse_content_text, ContentRecord};

#[test]
fn title_comes_from_the_spanish_labeled_line() {
    let text = "\
1. Teleprompter Script (English)
Some content

2. Attractive Title (SEO)
Español: My Great Title
Inglés: skip me
";
    let record = parse_content_text(text);
    assert_eq!(record.teleprompter_en, "Some content");
    assert_eq!(record.title, "My Great Title");
}

#[test]
fn full_numbered_document_maps_every_topic() {
    let text = "\
1. Script de Teleprompter (Inglés)
Imagine the next revolution in programming.
It could change everything!

2. Título Atractivo (SEO)
Español: 💸 OpenAI COMPRA Windsurf: ¿El Futuro?
Inglés: 💸 OpenAI BUYS Windsurf: The Future?

3. Descripción para YouTube (Español)
🚨 ¡Noticia BOMBA en el mundo de la IA! 🚨

Más detalles en el video.

4. Descripción para YouTube (Inglés)
🚨 BREAKING NEWS in the AI world! 🚨

More details in the video.

5. Tags para YouTube (Español)
OpenAI, Windsurf, IA, Inteligencia Artificial, programación

6. Tags para YouTube (Inglés)
OpenAI, Windsurf, AI, Artificial Intelligence, programming

7. Comentario para Pinear (Español)
¡Hola a todos! Déjame tu opinión en los comentarios.

8. Comentario para Pinear (Inglés)
Hey everyone! Leave your opinion in the comments.

9. Descripción para TikTok (Español)
OpenAI compra Windsurf 💸 ¿El futuro de la programación?

10. Descripción para TikTok (Inglés)
OpenAI buys Windsurf 💸 The future of programming?

11. Descripción para X (Español)
¡OpenAI compra Windsurf! 💸 ¿Revolucionará la programación?

12. Descripción para X (Inglés)
OpenAI buys Windsurf! 💸 Will it revolutionize programming?

13. Descripción para Facebook (Español)
🚨 ¡Noticia de última hora! 🚨 Comparte tu opinión.

14. Descripción para Facebook (Inglés)
🚨 Breaking news! 🚨 Share your opinion.
";
    let record = parse_content_text(text);

    assert_eq!(record.title, "💸 OpenAI COMPRA Windsurf: ¿El Futuro?");
    assert_eq!(
        record.teleprompter_en,
        "Imagine the next revolution in programming.\nIt could change everything!"
    );
    assert_eq!(record.teleprompter_es, "");
    assert_eq!(
        record.video_description_es,
        "🚨 ¡Noticia BOMBA en el mundo de la IA! 🚨\n\nMás detalles en el video."
    );
    assert_eq!(
        record.video_description_en,
        "🚨 BREAKING NEWS in the AI world! 🚨\n\nMore details in the video."
    );
    assert_eq!(
        record.tags_list_es,
        "OpenAI, Windsurf, IA, Inteligencia Artificial, programación"
    );
    assert_eq!(
        record.tags_list_en,
        "OpenAI, Windsurf, AI, Artificial Intelligence, programming"
    );
    assert_eq!(record.tags, vec!["OpenAI", "Windsurf", "IA"]);
    assert_eq!(
        record.pinned_comment_es,
        "¡Hola a todos! Déjame tu opinión en los comentarios."
    );
    assert_eq!(
        record.pinned_comment_en,
        "Hey everyone! Leave your opinion in the comments."
    );
    assert_eq!(
        record.tiktok_description_es,
        "OpenAI compra Windsurf 💸 ¿El futuro de la programación?"
    );
    assert_eq!(
        record.tiktok_description_en,
        "OpenAI buys Windsurf 💸 The future of programming?"
    );
    assert_eq!(
        record.twitter_post_es,
        "¡OpenAI compra Windsurf! 💸 ¿Revolucionará la programación?"
    );
    assert_eq!(
        record.twitter_post_en,
        "OpenAI buys Windsurf! 💸 Will it revolutionize programming?"
    );
    assert_eq!(
        record.facebook_description_es,
        "🚨 ¡Noticia de última hora! 🚨 Comparte tu opinión."
    );
    assert_eq!(
        record.facebook_description_en,
        "🚨 Breaking news! 🚨 Share your opinion."
    );
}

#[test]
fn x_post_is_truncated_in_numbered_layout() {
    let long_post = "word ".repeat(50);
    let text = format!("11. Descripción para X (Inglés)\n{}\n", long_post.trim());
    let record = parse_content_text(&text);
    assert!(record.twitter_post_en.chars().count() <= 180);
    assert!(!record.twitter_post_en.is_empty());
    assert!(long_post.starts_with(&record.twitter_post_en));
}

#[test]
fn tag_list_without_comma_yields_single_tag() {
    let text = "5. Tags para YouTube (Español)\nsingle\n";
    let record = parse_content_text(text);
    assert_eq!(record.tags_list_es, "single");
    assert_eq!(record.tags, vec!["single"]);
}

#[test]
fn missing_title_section_leaves_title_unset() {
    let text = "1. Teleprompter Script (English)\nJust a script.\n";
    let record = parse_content_text(text);
    assert_eq!(record.title, "");
    assert_eq!(record.teleprompter_en, "Just a script.");
}

#[test]
fn non_heading_numbers_are_body_content() {
    let text = "\
1. Teleprompter Script (English)
The price was 3.5 billion dollars.
2.Not a heading because no space
";
    let record = parse_content_text(text);
    assert_eq!(
        record.teleprompter_en,
        "The price was 3.5 billion dollars.\n2.Not a heading because no space"
    );
}

#[test]
fn emoji_and_hashtags_survive_segmentation() {
    let text = "\
1. Script de Teleprompter (Inglés)
This is a test script with emojis 🤖🔥💯

2. Título Atractivo (SEO)
Español: Prueba de emojis 🚀 y #hashtags
Inglés: Testing emoji 🚀 and #hashtags

3. Descripción para YouTube (Español)
Esta es una prueba con emojis 🤔 🤖 🎉 y #hashtags
";
    let record = parse_content_text(text);
    assert_eq!(record.teleprompter_en, "This is a test script with emojis 🤖🔥💯");
    assert_eq!(record.title, "Prueba de emojis 🚀 y #hashtags");
    assert_eq!(
        record.video_description_es,
        "Esta es una prueba con emojis 🤔 🤖 🎉 y #hashtags"
    );
}

#[test]
fn empty_sections_store_empty_strings() {
    let text = "1. Teleprompter Script (English)\n\n2. Descripción para YouTube (Inglés)\nText.\n";
    let record = parse_content_text(text);
    assert_eq!(record, ContentRecord {
        video_description_en: "Text.".to_string(),
        ..ContentRecord::default()
    });
}
