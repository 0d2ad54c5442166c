use crate::ResponseError;
use crate::codec::{Codec, ElementType};
use bytes::Bytes;
use futures::Stream;
use http_body::{Body, Frame};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Streaming,
    Done,
}

pin_project! {
    /// A body that encodes every element of the inner stream when it is polled.
    pub(crate) struct EncodedStream<S: Stream> {
        #[pin]
        inner: S,
        element_type: ElementType<S::Item>,
        codec: Codec,
        state: State,
    }
}

impl<S: Stream> EncodedStream<S> {
    pub(crate) fn new(inner: S, element_type: ElementType<S::Item>, codec: Codec) -> Self {
        Self { inner, element_type, codec, state: State::Start }
    }
}

impl<S: Stream> Body for EncodedStream<S> {
    type Data = Bytes;
    type Error = ResponseError;

    fn poll_frame(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.project();

        if *this.state == State::Done {
            return Poll::Ready(None);
        }

        match ready!(this.inner.poll_next(cx)) {
            Some(element) => {
                let encoded = match this.element_type.encode(&element, *this.codec) {
                    Ok(encoded) => encoded,
                    Err(e) => {
                        error!(element_type = this.element_type.name(), cause = %e, "failed to encode stream element");
                        *this.state = State::Done;
                        return Poll::Ready(Some(Err(e.into())));
                    }
                };

                let first = *this.state == State::Start;
                *this.state = State::Streaming;
                Poll::Ready(Some(Ok(Frame::data(this.codec.frame_element(encoded, first)))))
            }
            None => {
                let empty = *this.state == State::Start;
                *this.state = State::Done;
                Poll::Ready(this.codec.close_stream(empty).map(|bytes| Ok(Frame::data(bytes))))
            }
        }
    }

    fn is_end_stream(&self) -> bool {
        self.state == State::Done
    }
}
