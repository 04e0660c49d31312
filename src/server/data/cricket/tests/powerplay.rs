use super::*;
use crate::server::{
    data::cricket::powerplay::PowerplayRepository, model::scorecard::PowerplayRecord,
};

mod create_many {
    use super::*;

    /// Expect fractional over boundaries to be stored unchanged
    #[tokio::test]
    async fn creates_powerplays() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_scorecard_tables()
            .with_mock_match(1)
            .build()
            .await?;

        let powerplay_repo = PowerplayRepository::new(&test.db);
        let powerplays = powerplay_repo
            .create_many(&[PowerplayRecord {
                match_id: 1,
                innings_number: 2,
                from_over: 0.1,
                to_over: 9.6,
                powerplay_type: "mandatory".to_string(),
            }])
            .await?;

        assert_eq!(powerplays.len(), 1);
        assert_eq!(powerplays[0].from_over, 0.1);
        assert_eq!(powerplays[0].to_over, 9.6);
        assert_eq!(powerplays[0].innings_number, 2);
        assert_eq!(powerplay_repo.count_by_match_id(1).await?, 1);

        Ok(())
    }

    /// Expect an empty input to succeed without touching the store
    #[tokio::test]
    async fn returns_empty_for_empty_input() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let powerplay_repo = PowerplayRepository::new(&test.db);

        assert!(powerplay_repo.create_many(&[]).await?.is_empty());

        Ok(())
    }
}
