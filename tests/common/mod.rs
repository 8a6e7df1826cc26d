// Shared song fixtures for integration tests
#![allow(dead_code)]

use chords_wasm::models::{
    Chord, Node, Paragraph, Repeat, Song, SongInfo, SongLyrics, Strophe, Text, Verse,
};

pub fn chord(name: &str) -> Node {
    Chord::printed(name).expect("chord name should be valid").into()
}

pub fn hidden_chord(name: &str) -> Node {
    Chord::new(name, false).expect("chord name should be valid").into()
}

pub fn text(content: &str) -> Node {
    Text::new(content).into()
}

pub fn verse(nodes: Vec<Node>) -> Node {
    Verse::new(nodes).expect("verse children should be valid").into()
}

pub fn paragraph(nodes: Vec<Node>) -> Node {
    Paragraph::new(nodes).expect("paragraph children should be valid").into()
}

pub fn strophe(nodes: Vec<Node>, label: Option<&str>) -> Strophe {
    Strophe::new(nodes, label.map(String::from)).expect("strophe should be valid")
}

pub fn repeat(nodes: Vec<Node>, count: u32) -> Node {
    Repeat::new(nodes, count).expect("repeat should be valid").into()
}

pub fn info(title: &str, author: Option<&str>) -> SongInfo {
    SongInfo::new(title, author.map(String::from)).expect("title should be valid")
}

/// First strophe of "Okoř", with an inline repeat
pub fn okor_first_strophe() -> Strophe {
    strophe(
        vec![paragraph(vec![
            verse(vec![chord("D"), text("Na Okoř je cesta jako žádná ze sta,")]),
            verse(vec![
                chord("A7"),
                text("vroubená je "),
                repeat(vec![text("stromama")], 42),
                chord("D"),
                text("."),
            ]),
        ])],
        None,
    )
}

/// Chorus with a block repeat of both paragraphs
pub fn okor_chorus() -> Strophe {
    strophe(
        vec![repeat(
            vec![
                paragraph(vec![verse(vec![
                    text("Na hradě Okoři "),
                    chord("A7"),
                    text("světla už nehoří,"),
                ])]),
                paragraph(vec![repeat(
                    vec![verse(vec![
                        chord("D"),
                        text("on jí sebral "),
                        chord("A7"),
                        text("od komnaty klíč."),
                    ])],
                    2,
                )]),
            ],
            2,
        )],
        Some("R"),
    )
}

pub fn okor_second_strophe() -> Strophe {
    strophe(
        vec![paragraph(vec![verse(vec![chord("D"), text("Jednoho dne z rána,")])])],
        Some("2"),
    )
}

/// Okoř as a song document: strophe, chorus, strophe, chorus reference
pub fn okor_song(author: Option<&str>) -> Song {
    let mut lyrics = SongLyrics::builder();
    let chorus = lyrics.reference(okor_chorus());
    lyrics
        .push(okor_first_strophe())
        .push(okor_chorus())
        .push(okor_second_strophe())
        .push(chorus);
    Song::new(info("Okoř", author), lyrics.build().expect("lyrics should be valid"))
}

/// Variant used by the HTML fixture: chorus and its reference are block repeats
pub fn okor_song_with_block_repeats() -> Song {
    let chorus = strophe(
        vec![
            paragraph(vec![verse(vec![
                text("Na hradě Okoři "),
                chord("A7"),
                text("světla už nehoří,"),
            ])]),
            paragraph(vec![repeat(
                vec![verse(vec![
                    chord("D"),
                    text("on jí sebral "),
                    chord("A7"),
                    text("od komnaty klíč."),
                ])],
                2,
            )]),
        ],
        Some("R"),
    );

    let mut lyrics = SongLyrics::builder();
    let reference = lyrics.reference(chorus.clone());
    lyrics
        .push(okor_first_strophe())
        .push(repeat(vec![chorus.into()], 2))
        .push(okor_second_strophe())
        .push(repeat(vec![reference.into()], 2));
    Song::new(info("Okoř", None), lyrics.build().expect("lyrics should be valid"))
}

pub const OKOR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE song PUBLIC "-//JABURJAK//DTD Song 1.0//EN" "https://chords.jaburjak.cz/dtd/song-1.dtd">
<song xmlns="https://chords.jaburjak.cz/schema/song-1.xsd"
      xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
      xsi:noNamespaceSchemaLocation="https://chords.jaburjak.cz/schema/song-1.xsd">
	<info>
		<title>Okoř</title>
		<author>lidová</author>
	</info>
	<lyrics>
		<strophe>
			<paragraph>
				<verse><chord>D</chord>Na Okoř je cesta jako žádná ze sta,</verse>
				<verse><chord>A7</chord>vroubená je <repeat count="42">stromama</repeat><chord>D</chord>.</verse>
			</paragraph>
		</strophe>
		<strophe label="R">
			<repeat count="2">
				<paragraph>
					<verse>Na hradě Okoři <chord>A7</chord>světla už nehoří,</verse>
				</paragraph>
				<paragraph>
					<repeat>
						<verse><chord>D</chord>on jí sebral <chord>A7</chord>od komnaty klíč.</verse>
					</repeat>
				</paragraph>
			</repeat>
		</strophe>
		<strophe label="2">
			<paragraph>
				<verse><chord>D</chord>Jednoho dne z rána,</verse>
			</paragraph>
		</strophe>
		<strophe-ref ref="R" />
	</lyrics>
</song>
"#;

/// Wrap lyrics content in a minimal song document
pub fn song_xml(lyrics: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<song>\n\t<info>\n\t\t<title>title</title>\n\t</info>\n\t<lyrics>{}</lyrics>\n</song>\n",
        lyrics
    )
}
