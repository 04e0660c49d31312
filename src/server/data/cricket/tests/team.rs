use super::*;
use crate::server::data::cricket::team::TeamRepository;

mod create {
    use super::*;

    /// Expect a team to be created for an existing match
    #[tokio::test]
    async fn creates_team() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_scorecard_tables()
            .with_mock_match(1)
            .build()
            .await?;

        let team_repo = TeamRepository::new(&test.db);
        let team = team_repo.create(1, "England".to_string()).await?;

        assert_eq!(team.match_id, 1);
        assert_eq!(team.name, "England");

        Ok(())
    }

    /// Expect a foreign key error when the match does not exist
    #[tokio::test]
    async fn fails_for_unknown_match() -> Result<(), TestError> {
        let test = test_setup_with_scorecard_tables!()?;

        let team_repo = TeamRepository::new(&test.db);
        let result = team_repo.create(99, "England".to_string()).await;

        assert!(result.is_err());

        Ok(())
    }
}

mod count_by_match_id {
    use super::*;

    /// Expect counts to only include teams of the requested match
    #[tokio::test]
    async fn counts_teams_per_match() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_scorecard_tables()
            .with_mock_match(1)
            .with_mock_match(2)
            .build()
            .await?;
        test.insert_mock_team(1, "India").await?;
        test.insert_mock_team(1, "Pakistan").await?;
        test.insert_mock_team(2, "Australia").await?;

        let team_repo = TeamRepository::new(&test.db);

        assert_eq!(team_repo.count_by_match_id(1).await?, 2);
        assert_eq!(team_repo.count_by_match_id(2).await?, 1);
        assert_eq!(team_repo.count_by_match_id(3).await?, 0);

        Ok(())
    }
}
