use super::*;
use crate::server::data::cricket::cricket_match::MatchRepository;

mod create {
    use chrono::NaiveTime;

    use super::*;

    /// Expect the created match to receive an identifier and keep its fields
    #[tokio::test]
    async fn creates_match() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CricketMatch)?;

        let match_repo = MatchRepository::new(&test.db);
        let created = match_repo.create(match_record()).await?;

        assert!(created.id > 0);
        assert_eq!(created.city, "Lord's");
        assert_eq!(created.match_number, 48);
        assert_eq!(
            created.match_date,
            NaiveDate::from_ymd_opt(2019, 7, 14)
                .unwrap()
                .and_time(NaiveTime::MIN)
        );

        Ok(())
    }

    /// Expect two creations of the same record to yield distinct identifiers
    #[tokio::test]
    async fn assigns_distinct_ids() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CricketMatch)?;

        let match_repo = MatchRepository::new(&test.db);
        let first = match_repo.create(match_record()).await?;
        let second = match_repo.create(match_record()).await?;

        assert_ne!(first.id, second.id);

        Ok(())
    }

    /// Expect an error when the match table does not exist
    #[tokio::test]
    async fn fails_without_table() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let match_repo = MatchRepository::new(&test.db);
        let result = match_repo.create(match_record()).await;

        assert!(result.is_err());

        Ok(())
    }
}

mod get_by_id {
    use super::*;

    /// Expect the stored match to be found by its identifier
    #[tokio::test]
    async fn finds_existing_match() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::CricketMatch)
            .with_mock_match(1)
            .build()
            .await?;

        let match_repo = MatchRepository::new(&test.db);
        let found = match_repo.get_by_id(1).await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().match_number, 1);

        Ok(())
    }

    /// Expect None for an unknown identifier
    #[tokio::test]
    async fn returns_none_for_unknown_match() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::CricketMatch)?;

        let match_repo = MatchRepository::new(&test.db);
        let found = match_repo.get_by_id(42).await?;

        assert!(found.is_none());

        Ok(())
    }
}
