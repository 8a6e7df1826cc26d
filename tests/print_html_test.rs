// Test print HTML: header block, per-word cells and hidden chords

mod common;

use chords_wasm::models::{Song, SongLyrics};
use chords_wasm::renderers::html::print_body;
use chords_wasm::renderers::print::{FontSize, PrintOptions};
use chords_wasm::to_print_html;
use common::*;

fn single_verse_song(nodes: Vec<chords_wasm::models::Node>) -> Song {
    let mut lyrics = SongLyrics::builder();
    lyrics.push(strophe(vec![paragraph(vec![verse(nodes)])], None));
    Song::new(info("Okoř", Some("lidová")), lyrics.build().unwrap())
}

#[test]
fn test_full_document_uses_font_size() {
    let options = PrintOptions {
        font_size: FontSize::Smaller,
        ..PrintOptions::default()
    };
    let html = to_print_html(&okor_song(Some("lidová")), &options).expect("print export should succeed");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("font-size: 8pt;"));
    assert!(html.contains("<div class=\"header\"><h1>Okoř</h1><div class=\"author\">lidová</div></div>"));
}

#[test]
fn test_metadata_lines() {
    let options = PrintOptions {
        metadata: vec!["1930".into(), "capo 2".into(), "G dur".into()],
        ..PrintOptions::default()
    };
    let body = print_body(&okor_song(Some("lidová")), &options, true).unwrap();
    assert!(body.starts_with(
        "<div class=\"header\"><h1>Okoř</h1><div class=\"author\">lidová 1930</div><div class=\"meta\">capo 2</div><div class=\"meta\">G dur</div></div>"
    ));
}

#[test]
fn test_header_can_be_left_out() {
    let body = print_body(&okor_song(Some("lidová")), &PrintOptions::default(), false).unwrap();
    assert!(!body.contains("class=\"header\""));
    assert!(body.starts_with("<div class=\"paragraph\">"));
}

#[test]
fn test_text_is_split_per_word() {
    let song = single_verse_song(vec![chord("D"), text("Na Okoř je")]);
    let body = print_body(&song, &PrintOptions::default(), false).unwrap();
    assert_eq!(
        body,
        concat!(
            "<div class=\"paragraph\"><div class=\"verse\">",
            "<div class=\"cell\"><span class=\"chord\">D</span><br><span class=\"text\">Na\u{a0}</span></div>",
            "<div class=\"cell\"><span class=\"chord\"></span><br><span class=\"text\">Okoř\u{a0}</span></div>",
            "<div class=\"cell\"><span class=\"chord\"></span><br><span class=\"text\">je</span></div>",
            "</div></div>"
        )
    );
}

#[test]
fn test_hidden_chords_are_skipped() {
    let song = single_verse_song(vec![hidden_chord("A7"), text("vroubená")]);
    let body = print_body(&song, &PrintOptions::default(), false).unwrap();
    assert!(!body.contains("A7"));
    assert!(!body.contains("class=\"chord\""), "verse without eligible chords has no chord lane");
}

#[test]
fn test_hidden_chords_can_be_forced() {
    let song = single_verse_song(vec![hidden_chord("A7"), text("vroubená")]);
    let options = PrintOptions {
        print_hidden_chords: true,
        ..PrintOptions::default()
    };
    let body = print_body(&song, &options, false).unwrap();
    assert!(body.contains("<span class=\"chord\">A7</span><br><span class=\"text\">vroubená</span>"));
}

#[test]
fn test_labels_and_references() {
    let body = print_body(&okor_song_with_block_repeats(), &PrintOptions::default(), false).unwrap();
    assert!(body.contains("<div class=\"cell strophe-label\"><span class=\"chord\"></span><br><span class=\"text\">R (2×).\u{a0}</span></div>"));
    assert!(body.contains("<span class=\"text strophe-reference\">R. 2×</span>"));
    assert!(body.contains("<div class=\"cell repeat-marker\"><span class=\"chord\"></span><br><span class=\"text\">\u{a0}:] 42×</span></div>"));
}

#[test]
fn test_quotes_are_escaped() {
    let mut lyrics = SongLyrics::builder();
    lyrics.push(strophe(vec![paragraph(vec![verse(vec![text("it's \"here\"")])])], None));
    let song = Song::new(info("Rock 'n' roll", Some("\"Anon\"")), lyrics.build().unwrap());

    let html = print_body(&song, &PrintOptions::default(), true).expect("print export should succeed");
    assert!(html.contains("<h1>Rock &apos;n&apos; roll</h1>"));
    assert!(html.contains("<div class=\"author\">&quot;Anon&quot;</div>"));
    assert!(html.contains("<span class=\"text\">it&apos;s\u{a0}</span>"));
    assert!(html.contains("<span class=\"text\">&quot;here&quot;</span>"));
}
