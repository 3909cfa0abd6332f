use super::App;
use loft_workflow::command::{ParsedCommand, parse_command};
use loft_workflow::{ActorId, abort_pending};

impl App {
    pub(super) fn handle_command_issued(&mut self, actor: ActorId, name: &str, args: &[String]) {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match parse_command(name, &args) {
            Ok(ParsedCommand::Abort) => {
                let dropped = abort_pending(&mut self.store, actor);
                if dropped > 0 {
                    println!("Cleared {dropped} pending modification(s).");
                } else {
                    println!("Nothing pending to abort.");
                }
            }
            Ok(ParsedCommand::Queue(requests)) => {
                for request in requests {
                    self.store.add_request(actor, request);
                }
                println!("Queued. Click a block to apply.");
            }
            // A rejected command leaves no pending state behind.
            Err(e) => println!("Invalid command: {e}"),
        }
    }
}
