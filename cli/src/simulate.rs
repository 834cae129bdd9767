//! `simulate` subcommand: one full committee round against in-memory stores

use anyhow::{Context, Result};
use council_application::{
    CastVoteInput, CastVoteUseCase, CouncilState, DecisionJournal, FormCommitteeInput,
    FormCommitteeUseCase, GetDecisionUseCase, ManageValidatorsUseCase, NoDecisionJournal,
    OngoingDecisionsUseCase, ProposalDispatcher,
};
use council_domain::{
    CommitteeType, EventCategory, EventDetail, Milestone, ProfileRef, ProposalStatus,
    RandomnessSource, SeededRandomness, ValidatorApplication, ValidatorId,
};
use council_infrastructure::{
    ConfigValidationError, FileConfig, InMemoryApplicationStore, InMemoryEventStore,
    JsonlDecisionJournal, OsRandomness,
};
use council_presentation::{ConsoleFormatter, OutputFormat, SimulateArgs, VoteSpec};
use std::sync::Arc;
use tracing::{info, warn};

const MILESTONES_PER_EVENT: u64 = 3;

/// Administrator of a simulated council when none is configured
const SIMULATION_ADMIN: &str = "0xsimulation-admin";

pub async fn run(config: &FileConfig, args: SimulateArgs, output: OutputFormat) -> Result<()> {
    let params = config.to_engine_params()?;
    let admin = match config.admin() {
        Ok(admin) => admin,
        Err(ConfigValidationError::MissingAdmin) => {
            warn!(
                "No council.admin configured; using {} for this simulation",
                SIMULATION_ADMIN
            );
            ValidatorId::new(SIMULATION_ADMIN)?
        }
        Err(e) => return Err(e.into()),
    };

    let journal: Arc<dyn DecisionJournal> = match &config.journal.path {
        Some(path) => match JsonlDecisionJournal::open(path) {
            Some(journal) => {
                info!("Journaling decisions to {}", journal.path().display());
                Arc::new(journal)
            }
            None => Arc::new(NoDecisionJournal),
        },
        None => Arc::new(NoDecisionJournal),
    };
    let state = Arc::new(CouncilState::new(admin.clone(), params).with_journal(journal));

    // === Registry ===
    let validators = ManageValidatorsUseCase::new(Arc::clone(&state));
    let mut entries = config.validators()?;
    if entries.is_empty() {
        entries = synthetic_validators(args.validators)?;
    }
    for (address, profile) in entries {
        validators.register(&admin, address, profile)?;
    }
    info!("{} active validators", validators.count());

    // === Stores ===
    let events = Arc::new(InMemoryEventStore::new());
    let applications = Arc::new(InMemoryApplicationStore::new());
    seed_proposal(&events, &applications, args.committee_type, args.type_id).await?;

    // === Sortition ===
    let randomness: Arc<dyn RandomnessSource> = match args.seed.or(config.sortition.seed) {
        Some(seed) => Arc::new(SeededRandomness::new(seed)),
        None => Arc::new(OsRandomness),
    };
    let mut input = FormCommitteeInput::new(args.committee_type, args.type_id);
    if let Some(size) = args.size {
        input = input.with_size(size);
    }
    let formed = FormCommitteeUseCase::new(Arc::clone(&state), randomness)
        .execute(input)
        .context("Committee formation failed")?;

    let dispatcher = Arc::new(
        ProposalDispatcher::new(Arc::clone(&events), Arc::clone(&applications))
            .with_timeout(state.params().dispatch_timeout),
    );
    let ongoing = OngoingDecisionsUseCase::new(Arc::clone(&state), dispatcher);
    if output == OutputFormat::Text {
        println!("Committee {} formed:", formed.committee_id);
        for member in &formed.members {
            println!("  {}", member);
        }
        println!();
        if let Some(first) = formed.members.first() {
            println!(
                "{}",
                ConsoleFormatter::format_ongoing(first, &ongoing.for_user(first).await)
            );
        }
    }

    // === Voting ===
    let vote = CastVoteUseCase::new(
        Arc::clone(&state),
        Arc::clone(&events),
        Arc::clone(&applications),
    );
    for (index, member) in formed.members.iter().enumerate() {
        let planned = args.votes.get(index).cloned().unwrap_or(VoteSpec {
            approve: true,
            feedback: String::new(),
        });
        let result = vote
            .execute(
                CastVoteInput::new(formed.committee_id, member.clone(), planned.approve)
                    .with_feedback(planned.feedback),
            )
            .await?;
        if let Some(error) = result.settlement_error {
            warn!("Decision was not settled: {}", error);
        }
    }
    if args.votes.len() > formed.members.len() {
        warn!(
            "Ignored {} votes beyond the committee size",
            args.votes.len() - formed.members.len()
        );
    }

    let record = GetDecisionUseCase::new(Arc::clone(&state)).decision(formed.committee_id)?;
    match output {
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&record)),
        OutputFormat::Text => {
            println!("{}", ConsoleFormatter::format_record(&record));
            if record.committee_type == CommitteeType::Validator && record.final_decision {
                println!("Validator set now has {} active members", validators.count());
            }
        }
    }

    Ok(())
}

fn synthetic_validators(count: usize) -> Result<Vec<(ValidatorId, ProfileRef)>> {
    (1..=count)
        .map(|i| {
            let address = ValidatorId::new(format!("0x{:040x}", i))?;
            Ok((address, ProfileRef::new(format!("profile-{}", i))))
        })
        .collect()
}

/// Put the proposal a committee will decide on into the in-memory stores
async fn seed_proposal(
    events: &InMemoryEventStore,
    applications: &InMemoryApplicationStore,
    committee_type: CommitteeType,
    type_id: u64,
) -> Result<()> {
    match committee_type {
        CommitteeType::Event | CommitteeType::Milestone => {
            events
                .insert_event(EventDetail {
                    id: type_id,
                    owner: ValidatorId::new("0xorganizer")?,
                    name: format!("Charity event {}", type_id),
                    description: "Simulated charity event".to_string(),
                    category: EventCategory::Others,
                    status: ProposalStatus::Pending,
                })
                .await;
            for id in 0..MILESTONES_PER_EVENT {
                events
                    .insert_milestone(Milestone {
                        id,
                        event_id: type_id,
                        description: format!("Milestone {}", id + 1),
                        status: ProposalStatus::Pending,
                    })
                    .await;
            }
        }
        CommitteeType::Validator => {
            applications
                .insert(ValidatorApplication {
                    id: type_id,
                    applicant: ValidatorId::new(format!("0xapplicant{}", type_id))?,
                    profile: ProfileRef::new(format!("applicant-profile-{}", type_id)),
                    status: ProposalStatus::Pending,
                })
                .await;
        }
    }
    Ok(())
}
