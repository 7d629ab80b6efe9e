use chrono::prelude::*;
use tictactoe_core as game;
use game::{BOARD_SIDE, CellIndex, GameStatus, Mark};
use yew::prelude::*;

fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn status_message(session: &game::GameSession) -> String {
    match (session.status(), session.winner()) {
        (GameStatus::Won, Some(winner)) => format!("Player {} wins!", winner),
        (GameStatus::Draw, _) => "It's a draw!".to_string(),
        _ => format!("Next player: {}", session.next_mark()),
    }
}

fn history_label(number: usize, entry: &game::HistoryEntry) -> String {
    match entry.winner() {
        Some(winner) => format!("Game {}: {} won", number, winner),
        None => format!("Game {}: Draw", number),
    }
}

fn player_label(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "User 1",
        Mark::O => "User 2",
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(CellIndex),
    NewGame,
    ResetAll,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell {
            game::Cell::Empty => classes!(),
            game::Cell::Occupied(Mark::X) => classes!("mark-x"),
            game::Cell::Occupied(Mark::O) => classes!("mark-o"),
        }
    );
    if winning {
        class.push("win");
    }
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>{ cell.mark().map(|mark| mark.to_string()).unwrap_or_default() }</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ScoreBoardProps {
    scores: game::Scoreboard,
}

#[function_component(ScoreBoardView)]
fn score_board_component(props: &ScoreBoardProps) -> Html {
    let scores = props.scores;
    let row = |class: &'static str, label: &'static str, count: u32| {
        html! {
            <li {class}>
                <span>{ label }</span>
                <strong>{ count }</strong>
            </li>
        }
    };

    html! {
        <section class="scores">
            <h2>{"Score Board"}</h2>
            <ul>
                { row("mark-x", player_label(Mark::X), scores.wins(Mark::X)) }
                { row("mark-o", player_label(Mark::O), scores.wins(Mark::O)) }
                { row("draws", "Draws", scores.draws) }
            </ul>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct HistoryProps {
    history: Vec<game::HistoryEntry>,
}

#[function_component(HistoryView)]
fn history_component(props: &HistoryProps) -> Html {
    html! {
        <section class="history">
            <h2>{"Game History"}</h2>
            if props.history.is_empty() {
                <p>{"No games played yet"}</p>
            } else {
                <ul>
                    {
                        for props.history.iter().enumerate().rev().map(|(i, entry)| html! {
                            <li class={entry.winner().map_or("draw", |_| "win")}>
                                <span>{ history_label(i + 1, entry) }</span>
                                <time>{ entry.finished_at().format("%H:%M:%S").to_string() }</time>
                            </li>
                        })
                    }
                </ul>
            }
        </section>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    #[prop_or_default]
    pub config: game::GameConfig,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
}

impl GameView {
    fn is_winning_cell(&self, index: CellIndex) -> bool {
        self.session
            .winning_line()
            .is_some_and(|line| line.contains(&index))
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: game::GameSession::new(ctx.props().config),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClicked(index) => {
                let outcome = self.session.apply_move(index, utc_now());
                log::debug!("move at {}: {:?}", index, outcome);
                outcome.has_update()
            }
            NewGame => {
                log::debug!("new game");
                self.session.reset_game();
                true
            }
            ResetAll => {
                log::debug!("reset all");
                self.session.reset_stats();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = self.session.board();
        let is_playable = self.session.status().is_playing();
        let cb_cell = ctx.link().callback(CellClicked);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_reset_all = ctx.link().callback(|_: MouseEvent| ResetAll);

        html! {
            <div class="tictactoe">
                <main>
                    <h2 class="status">{ status_message(&self.session) }</h2>
                    <table class={is_playable.then_some("playable")}>
                        {
                            for (0..BOARD_SIDE).map(|row| html! {
                                <tr>
                                    {
                                        for (0..BOARD_SIDE).map(|col| {
                                            let index = row * BOARD_SIDE + col;
                                            let cell = board[index];
                                            let winning = self.is_winning_cell(index);
                                            let locked = !self.session.can_play_at(index);
                                            let callback = cb_cell.clone();
                                            html! {
                                                <CellView {index} {cell} {winning} {locked} {callback}/>
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </table>
                    <nav>
                        <button class="new-game" onclick={cb_new_game}>{"New Game"}</button>
                        <button class="reset-all" onclick={cb_reset_all}>{"Reset All"}</button>
                    </nav>
                </main>
                <aside>
                    <ScoreBoardView scores={self.session.scores()}/>
                    <HistoryView history={self.session.history().to_vec()}/>
                </aside>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(0).unwrap()
    }

    fn session_after(moves: &[CellIndex]) -> game::GameSession {
        let mut session = game::GameSession::default();
        for &index in moves {
            session.apply_move(index, t0());
        }
        session
    }

    #[test]
    fn status_names_next_player_while_playing() {
        assert_eq!(status_message(&session_after(&[])), "Next player: X");
        assert_eq!(status_message(&session_after(&[4])), "Next player: O");
    }

    #[test]
    fn status_names_winner_from_engine_result() {
        let session = session_after(&[0, 4, 1, 3, 2]);

        assert_eq!(status_message(&session), "Player X wins!");
    }

    #[test]
    fn status_for_o_win_when_o_starts() {
        let mut session = game::GameSession::new(game::GameConfig::new(Mark::O));
        for index in [0, 3, 1, 4, 2] {
            session.apply_move(index, t0());
        }

        assert_eq!(status_message(&session), "Player O wins!");
    }

    #[test]
    fn status_reports_draw() {
        let session = session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(status_message(&session), "It's a draw!");
    }

    #[test]
    fn history_labels_number_games_from_one() {
        let session = session_after(&[0, 4, 1, 3, 2]);
        let entry = &session.history()[0];

        assert_eq!(history_label(1, entry), "Game 1: X won");
        assert_eq!(
            entry.finished_at().format("%H:%M:%S").to_string(),
            "00:00:00"
        );
    }

    #[test]
    fn winning_cells_are_highlighted() {
        let view = GameView {
            session: session_after(&[0, 4, 1, 3, 2]),
        };

        assert!(view.is_winning_cell(0));
        assert!(view.is_winning_cell(2));
        assert!(!view.is_winning_cell(4));
    }

    #[test]
    fn players_are_labelled_by_mark() {
        assert_eq!(player_label(Mark::X), "User 1");
        assert_eq!(player_label(Mark::O), "User 2");
    }
}
