use aipet_core::db::migrations::latest_version;
use aipet_core::db::{open_db, open_db_in_memory};
use aipet_core::{
    AipetImplementation, CaseStudy, CaseStudyPatch, CaseStudyResults, ComplexityLevel,
    EntityStore, Exercise, ExerciseCategory, ExerciseLevel, FrameworkRelevance, ResearchPaper,
    SlotError, SlotStorage, SqliteSlotStorage, StoreConfig, StoreError,
};
use rusqlite::Connection;

#[test]
fn slots_round_trip_and_upsert() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();

    assert!(storage.read("aipet_Token").unwrap().is_none());
    storage.write("aipet_Token", "[]").unwrap();
    storage.write("aipet_Token", "[{\"a\":1}]").unwrap();
    storage.write("aipet_Exercise", "[]").unwrap();

    assert_eq!(
        storage.read("aipet_Token").unwrap().as_deref(),
        Some("[{\"a\":1}]")
    );
    assert_eq!(storage.keys().unwrap(), vec!["aipet_Exercise", "aipet_Token"]);

    storage.remove("aipet_Token").unwrap();
    storage.remove("aipet_Token").unwrap();
    assert!(storage.read("aipet_Token").unwrap().is_none());
}

#[test]
fn storage_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSlotStorage::try_new(&conn) {
        Err(SlotError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn storage_rejects_connection_without_slot_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSlotStorage::try_new(&conn);
    assert!(matches!(
        result,
        Err(SlotError::MissingRequiredTable("storage_slots"))
    ));
}

#[test]
fn records_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aipet.db");

    let created = {
        let conn = open_db(&path).unwrap();
        let storage = SqliteSlotStorage::try_new(&conn).unwrap();
        let mut store = EntityStore::<Exercise, _>::open(&storage).unwrap();
        store
            .create(Exercise {
                title: "Creating Your First Color Token".to_string(),
                level: ExerciseLevel::Beginner,
                category: ExerciseCategory::Foundation,
                description: "Basics".to_string(),
                instructions: "Define a primary color".to_string(),
                expected_tokens: vec!["color.primary.500".to_string()],
                figma_template_url: "https://figma.com/template/color-tokens".to_string(),
                learning_objectives: vec!["Naming".to_string(), "Structure".to_string()],
            })
            .unwrap()
    };

    let conn = open_db(&path).unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();
    let store = EntityStore::<Exercise, _>::open(&storage).unwrap();
    assert_eq!(store.list(None, None), vec![created]);
}

#[test]
fn nested_groups_round_trip_and_patch_replaces_whole_group() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();

    let case = CaseStudy {
        title: "Netflix".to_string(),
        company: "Netflix".to_string(),
        challenge: "Choice overload".to_string(),
        solution_approach: "Transparent recommendations".to_string(),
        aipet_implementation: AipetImplementation {
            agency: "opt out".to_string(),
            interaction: "explanations".to_string(),
            privacy: "data indicators".to_string(),
            experience: "evolving rows".to_string(),
            trust: "confidence".to_string(),
        },
        results: CaseStudyResults {
            quantitative: vec!["35% engagement".to_string()],
            qualitative: vec!["More control".to_string()],
        },
        tokens_created: vec!["ai.confidence.high".to_string()],
        lessons_learned: vec![],
        complexity_level: ComplexityLevel::Advanced,
    };

    let created = {
        let mut store = EntityStore::<CaseStudy, _>::open(&storage).unwrap();
        store.create(case).unwrap()
    };

    let mut store = EntityStore::<CaseStudy, _>::open(&storage).unwrap();
    assert_eq!(store.get(&created.meta.id).unwrap(), created);

    let updated = store
        .update(
            &created.meta.id,
            CaseStudyPatch {
                results: Some(CaseStudyResults::default()),
                ..CaseStudyPatch::default()
            },
        )
        .unwrap();
    assert!(updated.data.results.quantitative.is_empty());
    assert_eq!(updated.data.aipet_implementation.agency, "opt out");
}

#[test]
fn decodes_collections_written_in_the_browser_format() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();
    storage
        .write(
            "base44_ResearchPaper",
            r#"[{
                "title": "Measuring Trust in AI Systems",
                "authors": ["Dr. Kevin Zhang", "Lisa Anderson"],
                "journal": "Journal of AI Research",
                "year": 2023,
                "category": "trust_building",
                "framework_relevance": "Multi-Framework",
                "abstract": "A framework for measuring trust.",
                "key_insights": ["Trust builds incrementally"],
                "doi": "10.1613/jair.1.14567",
                "url": "https://www.jair.org/index.php/jair/article/view/14567",
                "id": "ResearchPaper_1718000000000_k3j9x0a2b",
                "created_date": "2024-06-10T06:13:20.000Z",
                "updated_date": "2024-06-10T06:13:20.000Z",
                "created_by": "current_user"
            }]"#,
        )
        .unwrap();

    let config = StoreConfig::default().with_key_prefix("base44_");
    let store = EntityStore::<ResearchPaper, _>::open_with_config(&storage, config).unwrap();
    let papers = store.list(None, None);
    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].meta.id, "ResearchPaper_1718000000000_k3j9x0a2b");
    assert_eq!(papers[0].data.year, 2023);
    assert_eq!(papers[0].data.summary, "A framework for measuring trust.");
    assert_eq!(papers[0].meta.created_date, papers[0].meta.updated_date);
    assert_eq!(
        papers[0].data.framework_relevance,
        FrameworkRelevance::MultiFramework
    );

    assert!(EntityStore::<ResearchPaper, _>::open(&storage)
        .unwrap()
        .is_empty());
}

#[test]
fn slot_with_wrong_shape_fails_to_open() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteSlotStorage::try_new(&conn).unwrap();
    storage
        .write("aipet_Exercise", r#"[{"id": "Exercise_1", "title": 7}]"#)
        .unwrap();

    let result = EntityStore::<Exercise, _>::open(&storage);
    assert!(matches!(result, Err(StoreError::Decode { collection: "Exercise", .. })));
}
