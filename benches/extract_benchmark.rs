use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tui_dict_app::internal::models::{Entry, WordCard};
use tui_dict_app::internal::ui::view::wrap_text_block;

const RESPONSE_JSON: &str = r#"[
    {
        "word": "petrichor",
        "phonetic": "/ˈpɛt.ɹɪ.kɔɹ/",
        "phonetics": [
            { "text": "/ˈpɛt.ɹɪ.kɔɹ/", "audio": "" },
            {
                "text": "/ˈpɛt.ɹɪ.kɔː/",
                "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/petrichor-uk.mp3"
            }
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "synonyms": ["rain smell", "after-rain scent"],
                "definitions": [
                    {
                        "definition": "The pleasant smell that accompanies the first rain after a dry spell.",
                        "example": "Petrichor rose from the pavement as the storm began."
                    },
                    {
                        "definition": "The yellowish organic oil that yields this smell."
                    }
                ]
            },
            {
                "partOfSpeech": "adjective",
                "synonyms": [],
                "definitions": [
                    { "definition": "Of or relating to this smell." }
                ]
            }
        ]
    }
]"#;

fn benchmark_card_extraction(c: &mut Criterion) {
    c.bench_function("parse response", |b| {
        b.iter(|| serde_json::from_str::<Vec<Entry>>(black_box(RESPONSE_JSON)))
    });

    let entries: Vec<Entry> = serde_json::from_str(RESPONSE_JSON).unwrap();
    c.bench_function("extract card", |b| {
        b.iter(|| WordCard::from_entries(black_box(&entries)))
    });
}

fn benchmark_wrap(c: &mut Criterion) {
    let definition = "The pleasant, distinctive smell of earth after rain falls on dry ground, especially after a long period of warm and dry weather.";

    c.bench_function("wrap_text_block short", |b| {
        b.iter(|| wrap_text_block(black_box(definition), black_box(60)))
    });

    let long_definition = definition.repeat(10);
    c.bench_function("wrap_text_block long", |b| {
        b.iter(|| wrap_text_block(black_box(&long_definition), black_box(60)))
    });
}

criterion_group!(benches, benchmark_card_extraction, benchmark_wrap);
criterion_main!(benches);
