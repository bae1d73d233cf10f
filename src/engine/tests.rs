use super::Pipeline;
use crate::Mode;
use crate::rules::DEFAULT_TABLES;

fn run(mode: Mode, chunk: &str) -> String {
    Pipeline::new(&DEFAULT_TABLES, mode).run(&format!(" {chunk} "))
}

#[test]
fn extended_examples_matching() {
    // Array of (expected_output, input_chunk)
    let cases: Vec<(&str, &str)> = vec![
        ("am dritten april zweitausendzwanzig", "Am 3.4.2020"),
        ("am dritten april", "am 3.4."),
        ("im jahr neunzehnhundertfünfundsiebzig", "Im Jahr 1975"),
        ("im jahr neunzehnhundertfünfundsiebzig", "im Jahr 1975."),
        ("im jahr zweitausend", "im Jahr 2000"),
        ("er kam am fünften mai neunzehnhundertneunzig an", "Er kam am 5. Mai 1990 an."),
        ("einundzwanzig", "21"),
        ("einhundert", "100"),
        ("der siebzehnte juni", "der 17. Juni"),
        ("die dritte auflage", "die 3. Auflage"),
        ("dritter april", "3. Apr"),
        ("seite fünf", "Seite 5."),
        ("zehn bis fünfzehn", "10-15"),
        ("zehn bis fünfzehn", "10 – 15"),
        ("online-shop", "Online-Shop"),
        ("online-shop", "Online–Shop"),
        ("ein- und ausgang", "Ein- und Ausgang"),
        ("zum beispiel", "z.B."),
        ("zum beispiel", "z. B."),
        ("unter anderem die u.s.a.", "u.a. die U.S.A."),
        ("vierzehn uhr dreißig", "14:30 Uhr"),
        ("vierzehn uhr", "14:00 Uhr"),
        ("neun uhr bis siebzehn uhr", "9.00 - 17 Uhr"),
        ("das kostet fünf euro beziehungsweise sechs dollar", "Das kostet 5 € bzw. 6 $."),
        ("zwanzig grad celsius", "20°C"),
        ("dreimal in der woche", "3x in der Woche"),
        ("im neunzehnten jahrhundert", "im 19. Jh."),
        ("minus fünf grad", "-5 Grad"),
        ("fünfzig kilometer pro stunde", "50km/h"),
        ("test", "a b c test"),
        ("hallo welt", "„Hallo“ (Welt)!"),
        ("eintausend menschen", "1.000 Menschen"),
        ("am dritten april zweitausendzwanzig", "Am 3.4.2020."),
        ("er kam am vierundzwanzigsten dezember zweitausendneunzehn", "Er kam am 24.12.2019."),
        ("ende 2019", "Ende 2019."),
        ("zwei eins", "2:1"),
        ("das spiel endete zwei eins", "Das Spiel endete 2:1."),
        ("hauptstraße fünf", "Hauptstr. 5"),
        ("goethe-straße zwölf", "Goethe-Str. 12"),
        ("ein- aus- und umbau", "Ein-, Aus- und Umbau"),
    ];

    for (expected, input) in cases {
        assert_eq!(run(Mode::Extended, input), expected, "extended input {input:?}");
    }
}

#[test]
fn basic_examples_matching() {
    let cases: Vec<(&str, &str)> = vec![
        ("am 3.4.2020", "Am 3.4.2020"),
        ("der 17. juni", "der 17. Juni"),
        ("10 - 15", "10-15"),
        ("online-shop", "Online-Shop"),
        ("z.b.", "z.B."),
        ("z.b.", "z. B."),
        ("et al.", "et al."),
        ("die u.s.a.", "die U.S.A."),
        ("5 %", "5%"),
        ("50 kmh", "50km/h"),
        ("es hat -5 grad", "es hat -5 Grad"),
        ("a b c test", "a b c test"),
        ("14 30 uhr", "14:30 Uhr"),
        ("2 1", "2:1"),
        ("ende 2019.", "Ende 2019."),
        ("hauptstr. 5", "Hauptstr. 5"),
        ("ein- aus- und umbau", "Ein-, Aus- und Umbau"),
    ];

    for (expected, input) in cases {
        assert_eq!(run(Mode::Basic, input), expected, "basic input {input:?}");
    }
}

#[test]
fn output_is_idempotent_on_examples() {
    let inputs = [
        "Am 3.4.2020",
        "10-15",
        "Online-Shop",
        "z.B. im Jahr 1975",
        "14:30 Uhr",
        "5%",
        "2:1",
        "Am 3.4.2020.",
        "Er kam am 24.12.2019.",
        "Ende 2019.",
        "Hauptstr. 5",
        "Ein-, Aus- und Umbau",
    ];
    for mode in [Mode::Basic, Mode::Extended] {
        for input in inputs {
            let once = run(mode, input);
            assert_eq!(run(mode, &once), once, "{mode:?} not idempotent for {input:?}");
        }
    }
}

#[test]
fn literal_marker_characters_cannot_leak() {
    let out = run(Mode::Extended, "a\u{E000}b \u{E002} 3\u{E001}4");
    assert!(!out.chars().any(|c| ('\u{E000}'..='\u{F8FF}').contains(&c)), "marker leaked: {out:?}");
}
