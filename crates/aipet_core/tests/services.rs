use aipet_core::{
    AipetFramework, CaseStudy, DashboardService, DesignPattern, EntityStore, Exercise,
    ExerciseField, MemorySlotStorage, OrderBy, ResearchPaper, ResearchPaperField, SeedService,
    StoreConfig, Token, TokenCategory, TokenSearch, TokenService,
};
use std::thread::sleep;
use std::time::Duration;

#[test]
fn seeding_fills_empty_collections_once() {
    let storage = MemorySlotStorage::new();
    let seeder = SeedService::new(storage.clone());

    let first = seeder.seed_all().unwrap();
    assert!(first.exercises > 0);
    assert!(first.research_papers > 0);
    assert!(first.case_studies > 0);
    assert!(first.design_patterns > 0);

    let second = seeder.seed_all().unwrap();
    assert_eq!(second.total(), 0);

    let exercises = EntityStore::<Exercise, _>::open(storage.clone()).unwrap();
    assert_eq!(exercises.len(), first.exercises);
    let patterns = EntityStore::<DesignPattern, _>::open(storage.clone()).unwrap();
    assert_eq!(patterns.len(), first.design_patterns);
    let cases = EntityStore::<CaseStudy, _>::open(storage).unwrap();
    assert_eq!(cases.len(), first.case_studies);
}

#[test]
fn seeding_skips_collection_that_already_has_records() {
    let storage = MemorySlotStorage::new();
    {
        let seeder = SeedService::new(&storage);
        seeder.seed_research_papers().unwrap();
    }
    let papers_before = EntityStore::<ResearchPaper, _>::open(&storage)
        .unwrap()
        .list(None, None);

    let report = SeedService::new(&storage).seed_all().unwrap();
    assert_eq!(report.research_papers, 0);
    assert!(report.exercises > 0);

    let papers_after = EntityStore::<ResearchPaper, _>::open(&storage)
        .unwrap()
        .list(None, None);
    assert_eq!(papers_before, papers_after);
}

#[test]
fn seeded_content_supports_page_orderings() {
    let storage = MemorySlotStorage::new();
    SeedService::new(&storage).seed_all().unwrap();

    let papers = EntityStore::<ResearchPaper, _>::open(&storage).unwrap();
    let by_year: OrderBy<ResearchPaperField> = "-year".parse().unwrap();
    let years: Vec<_> = papers
        .list(Some(&by_year), None)
        .into_iter()
        .map(|record| record.data.year)
        .collect();
    let mut sorted = years.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);

    let exercises = EntityStore::<Exercise, _>::open(&storage).unwrap();
    let by_level = OrderBy::asc(ExerciseField::Level);
    assert_eq!(exercises.list(Some(&by_level), None).len(), exercises.len());
}

#[test]
fn seeded_records_carry_configured_principal() {
    let storage = MemorySlotStorage::new();
    let config = StoreConfig::default().with_principal("system");
    SeedService::with_config(&storage, config.clone())
        .seed_exercises()
        .unwrap();

    let exercises = EntityStore::<Exercise, _>::open_with_config(&storage, config).unwrap();
    assert!(exercises
        .list(None, None)
        .iter()
        .all(|record| record.meta.created_by == "system"));
}

#[test]
fn dashboard_counts_collections_and_lists_recent_tokens() {
    let storage = MemorySlotStorage::new();
    SeedService::new(&storage).seed_all().unwrap();

    let tokens = TokenService::new(&storage);
    for name in ["color.primary", "spacing.md", "radius.sm"] {
        tokens
            .save_token(
                None,
                Token::new(name, TokenCategory::Color, "1", AipetFramework::Traditional),
            )
            .unwrap();
        sleep(Duration::from_millis(2));
    }

    let dashboard = DashboardService::new(&storage);
    let stats = dashboard.stats().unwrap();
    assert_eq!(stats.total_tokens, 3);
    assert!(stats.exercises > 0);
    assert!(stats.research_papers > 0);
    assert!(stats.case_studies > 0);

    let recent: Vec<_> = dashboard
        .recent_tokens(2)
        .unwrap()
        .into_iter()
        .map(|record| record.data.name)
        .collect();
    assert_eq!(recent, vec!["radius.sm", "spacing.md"]);
}

#[test]
fn token_service_saves_searches_and_deletes() {
    let storage = MemorySlotStorage::new();
    let service = TokenService::new(storage);

    let mut primary = Token::new(
        "color.primary.500",
        TokenCategory::Color,
        "#3B82F6",
        AipetFramework::Traditional,
    );
    primary.description = "Primary brand color".to_string();
    let primary = service.save_token(None, primary).unwrap();

    let agency = service
        .save_token(
            None,
            Token::new(
                "ai.agency.override",
                TokenCategory::Agency,
                "visible",
                AipetFramework::Agency,
            ),
        )
        .unwrap();

    let brand = service
        .search_tokens(&TokenSearch {
            text: "BRAND".to_string(),
            ..TokenSearch::default()
        })
        .unwrap();
    assert_eq!(brand.len(), 1);
    assert_eq!(brand[0].meta.id, primary.meta.id);

    let agency_only = service
        .search_tokens(&TokenSearch {
            framework: Some(AipetFramework::Agency),
            ..TokenSearch::default()
        })
        .unwrap();
    assert_eq!(agency_only.len(), 1);
    assert_eq!(agency_only[0].meta.id, agency.meta.id);

    let mut edited = primary.data.clone();
    edited.value = "#2563EB".to_string();
    let saved = service.save_token(Some(&primary.meta.id), edited).unwrap();
    assert_eq!(saved.meta.id, primary.meta.id);
    assert_eq!(saved.data.value, "#2563EB");
    assert_eq!(service.list_tokens().unwrap()[0].meta.id, primary.meta.id);

    service.delete_token(&agency.meta.id).unwrap();
    assert_eq!(service.list_tokens().unwrap().len(), 1);
    assert!(service.delete_token(&agency.meta.id).unwrap_err().is_not_found());
}
