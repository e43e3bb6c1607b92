use pdf_images::*;

#[test]
fn test_default_options() {
    let options = ConvertOptions::default();
    assert_eq!(options.output_filename, "converted.pdf");
    assert_eq!(options.webp_embedding, WebpEmbedding::Decode);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_output_filename() {
    let mut options = ConvertOptions::default();

    options.output_filename = "   ".to_string();
    assert!(matches!(options.validate(), Err(ConvertError::Config(_))));

    options.output_filename = "album.png".to_string();
    match options.validate() {
        Err(ConvertError::Config(msg)) => assert!(msg.contains(".pdf")),
        _ => panic!("Expected Config error"),
    }

    options.output_filename = "nested/album.pdf".to_string();
    assert!(options.validate().is_err());

    options.output_filename = "Album.PDF".to_string();
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_surrounding_whitespace() {
    let mut options = ConvertOptions::default();

    for name in [" album.pdf", "album.pdf ", " album.pdf ", "album.pdf\n"] {
        options.output_filename = name.to_string();
        assert!(
            matches!(options.validate(), Err(ConvertError::Config(_))),
            "{:?} should be rejected",
            name
        );
    }

    options.output_filename = "my album.pdf".to_string();
    assert!(options.validate().is_ok());
}

#[test]
fn test_embed_format_mapping() {
    let mut options = ConvertOptions::default();
    assert_eq!(options.embed_format(ImageFormat::Jpeg), EmbedFormat::Jpeg);
    assert_eq!(options.embed_format(ImageFormat::Png), EmbedFormat::Png);
    assert_eq!(options.embed_format(ImageFormat::Gif), EmbedFormat::Gif);
    assert_eq!(options.embed_format(ImageFormat::Webp), EmbedFormat::Webp);

    options.webp_embedding = WebpEmbedding::LabelAsJpeg;
    assert_eq!(options.embed_format(ImageFormat::Webp), EmbedFormat::Jpeg);
    assert_eq!(options.embed_format(ImageFormat::Png), EmbedFormat::Png);
}

#[test]
fn test_user_messages() {
    assert_eq!(
        ConvertError::EmptyCollection.user_message(),
        EMPTY_COLLECTION_MESSAGE
    );
    assert_eq!(
        ConvertError::UnsupportedFormat("image/bmp".into()).user_message(),
        CONVERSION_FAILED_MESSAGE
    );
    assert_eq!(
        ConvertError::Encoder("boom".into()).user_message(),
        CONVERSION_FAILED_MESSAGE
    );
}

#[test]
fn test_page_spec_orientation() {
    let square = PageSpec::from_pixels(96, 96);
    assert_eq!(square.orientation, Orientation::Portrait);

    let wide = PageSpec::from_pixels(97, 96);
    assert_eq!(wide.orientation, Orientation::Landscape);

    let tall = PageSpec::from_pixels(96, 97);
    assert_eq!(tall.orientation, Orientation::Portrait);
}

#[test]
fn test_placement_fills_page() {
    let page = PageSpec::from_pixels(192, 96);
    let placement = Placement::fill(&page);
    assert_eq!(placement.x_mm, 0.0);
    assert_eq!(placement.y_mm, 0.0);
    assert!((placement.width_mm - 50.8).abs() < 1e-4);
    assert!((placement.height_mm - 25.4).abs() < 1e-4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = ConvertOptions {
        output_filename: "holiday.pdf".to_string(),
        title: "Holiday".to_string(),
        webp_embedding: WebpEmbedding::LabelAsJpeg,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = ConvertOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "title": "Scans" }"#).unwrap();

    let loaded = ConvertOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.title, "Scans");
    assert_eq!(loaded.output_filename, "converted.pdf");
    assert_eq!(loaded.webp_embedding, WebpEmbedding::Decode);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match ConvertOptions::load(temp_file.path()).await {
        Err(ConvertError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
