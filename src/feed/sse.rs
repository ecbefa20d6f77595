/// One `text/event-stream` frame: an event name and its data payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SseFrame {
    pub event: String,
    pub data: String,
}

/// Incremental parser over the raw byte stream. Frames are separated by a
/// blank line; multiple `data:` lines within a frame are joined with
/// newlines.
#[derive(Default)]
pub struct SseFrameParser {
    buffer: Vec<u8>,
    current: SseFrame,
}

impl SseFrameParser {
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);
        let mut frames = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let raw_line: Vec<u8> = self.buffer.drain(..=newline).collect();
            let line = String::from_utf8_lossy(&raw_line);
            if let Some(frame) = self.feed_line(line.trim_end_matches(['\r', '\n'])) {
                frames.push(frame);
            }
        }
        frames
    }

    fn feed_line(&mut self, line: &str) -> Option<SseFrame> {
        if line.is_empty() {
            if self.current == SseFrame::default() {
                return None;
            }
            return Some(std::mem::take(&mut self.current));
        }
        if let Some(event) = line.strip_prefix("event:") {
            self.current.event = event.trim_start().to_string();
        } else if let Some(data) = line.strip_prefix("data:") {
            if !self.current.data.is_empty() {
                self.current.data.push('\n');
            }
            self.current.data.push_str(data.trim_start());
        }
        None
    }
}
