//! The one task that owns the game.
//! ✔ single writer: every mutation is a command on one queue
//! ✔ food searches wait outside the task, so nothing else is held up
//! ✔ dropping a pending search cancels it with no state change

use crate::{
    error::{GameError, Result},
    game::{
        logic::{BattleReport, Engine, FoodSearch, Purchase, SearchPlan, TrainOutcome},
        types::{GameState, Pet},
    },
};
use tokio::{
    sync::{mpsc, oneshot},
    time::sleep,
};

const QUEUE_DEPTH: usize = 64;

type Reply<T> = oneshot::Sender<Result<T>>;

enum Command {
    Snapshot(oneshot::Sender<GameState>),
    Train { pet_id: u64, reply: Reply<TrainOutcome> },
    Buy { pet_type: String, reply: Reply<Purchase> },
    Battle { pet1_id: u64, pet2_id: u64, reply: Reply<BattleReport> },
    PlanSearch { pet_id: u64, reply: Reply<SearchPlan> },
    ApplyFood { plan: SearchPlan, power: u32, reply: Reply<Pet> },
    Reset(oneshot::Sender<()>),
}

/// Cloneable handle to the running game task.
#[derive(Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Command>,
}

/// Spawn the game task on the current runtime and return its handle.
/// The task ends once every handle has been dropped.
pub fn spawn(engine: Engine) -> GameHandle {
    let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
    tokio::spawn(run(engine, rx));
    GameHandle { tx }
}

async fn run(mut engine: Engine, mut rx: mpsc::Receiver<Command>) {
    while let Some(cmd) = rx.recv().await {
        // A dropped reply receiver just means the caller went away.
        match cmd {
            Command::Snapshot(reply) => {
                let _ = reply.send(engine.state().clone());
            }
            Command::Train { pet_id, reply } => {
                let _ = reply.send(engine.train(pet_id));
            }
            Command::Buy { pet_type, reply } => {
                let _ = reply.send(engine.buy(&pet_type));
            }
            Command::Battle {
                pet1_id,
                pet2_id,
                reply,
            } => {
                let _ = reply.send(engine.battle(pet1_id, pet2_id));
            }
            Command::PlanSearch { pet_id, reply } => {
                let _ = reply.send(engine.plan_search(pet_id));
            }
            Command::ApplyFood { plan, power, reply } => {
                let _ = reply.send(engine.apply_food(&plan, power));
            }
            Command::Reset(reply) => {
                engine.reset();
                let _ = reply.send(());
            }
        }
    }
    log::debug!("game session stopped");
}

impl GameHandle {
    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        rx.await.map_err(|_| GameError::SessionClosed)?
    }

    pub async fn snapshot(&self) -> Result<GameState> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot(reply))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        rx.await.map_err(|_| GameError::SessionClosed)
    }

    pub async fn train(&self, pet_id: u64) -> Result<TrainOutcome> {
        self.request(|reply| Command::Train { pet_id, reply }).await
    }

    pub async fn buy(&self, pet_type: impl Into<String>) -> Result<Purchase> {
        let pet_type = pet_type.into();
        self.request(|reply| Command::Buy { pet_type, reply }).await
    }

    pub async fn battle(&self, pet1_id: u64, pet2_id: u64) -> Result<BattleReport> {
        self.request(|reply| Command::Battle {
            pet1_id,
            pet2_id,
            reply,
        })
        .await
    }

    /// Send the pet out looking for food.
    ///
    /// Resolves after the rolled delay. Other commands keep flowing while
    /// this waits, and a reset in the meantime turns the result into
    /// `PetNotFound`.
    pub async fn search_food(&self, pet_id: u64) -> Result<FoodSearch> {
        let plan = self
            .request(|reply| Command::PlanSearch { pet_id, reply })
            .await?;

        sleep(plan.delay).await;

        let Some(power) = plan.power else {
            log::debug!("pet {pet_id} got lost searching for food");
            return Ok(FoodSearch::Lost);
        };
        let pet = self
            .request(|reply| Command::ApplyFood { plan, power, reply })
            .await?;
        Ok(FoodSearch::Found { power, pet })
    }

    pub async fn reset(&self) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Reset(reply))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        rx.await.map_err(|_| GameError::SessionClosed)
    }
}
